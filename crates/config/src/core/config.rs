//! Settings resolution with environment fallback

use super::{ConfigResult, ConfigSource, EnvLookup, SettingsProvider};

/// A setting value together with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The raw value, unmodified
    pub value: String,
    /// Which layer answered
    pub source: ConfigSource,
}

/// Two-layer view over the host settings and the environment.
///
/// For every key the settings provider is asked first. An absent **or
/// empty** answer falls through to the environment variable of the same
/// name. An empty environment value is returned as-is so that validation
/// can report it.
#[derive(Clone, Copy)]
pub struct LayeredSettings<'a> {
    settings: &'a dyn SettingsProvider,
    env: &'a dyn EnvLookup,
}

impl<'a> LayeredSettings<'a> {
    /// Layer `settings` over `env`.
    pub fn new(settings: &'a dyn SettingsProvider, env: &'a dyn EnvLookup) -> Self {
        Self { settings, env }
    }

    /// Resolve `key`, reporting which source supplied it.
    pub fn resolve(&self, key: &str) -> ConfigResult<Option<Resolved>> {
        if let Some(value) = self.settings.get_setting(key)?
            && !value.is_empty()
        {
            cronoszkevm_log::debug!(key, source = ConfigSource::Settings.name(), "setting resolved");
            return Ok(Some(Resolved {
                value,
                source: ConfigSource::Settings,
            }));
        }

        match self.env.var(key)? {
            Some(value) => {
                cronoszkevm_log::debug!(key, source = ConfigSource::Env.name(), "setting resolved");
                Ok(Some(Resolved {
                    value,
                    source: ConfigSource::Env,
                }))
            }
            None => {
                cronoszkevm_log::trace!(key, "setting not found in any source");
                Ok(None)
            }
        }
    }

    /// Resolve `key` and drop the source.
    pub fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.resolve(key)?.map(|resolved| resolved.value))
    }
}

impl SettingsProvider for LayeredSettings<'_> {
    fn get_setting(&self, key: &str) -> ConfigResult<Option<String>> {
        self.get(key)
    }
}

impl std::fmt::Debug for LayeredSettings<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredSettings").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;
    use crate::loaders::{MapEnv, MapSettings};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    struct Unreachable;

    impl SettingsProvider for Unreachable {
        fn get_setting(&self, key: &str) -> ConfigResult<Option<String>> {
            Err(ConfigError::provider(key, "connection refused"))
        }
    }

    #[test]
    fn settings_take_precedence() {
        let settings = MapSettings::new().with("KEY", "from-settings");
        let env = MapEnv::new().with("KEY", "from-env");
        let layered = LayeredSettings::new(&settings, &env);

        assert_eq!(
            layered.resolve("KEY").unwrap(),
            Some(Resolved {
                value: "from-settings".into(),
                source: ConfigSource::Settings,
            })
        );
    }

    #[test]
    fn empty_setting_falls_back_to_env() {
        let settings = MapSettings::new().with("KEY", "");
        let env = MapEnv::new().with("KEY", "from-env");
        let layered = LayeredSettings::new(&settings, &env);

        let resolved = layered.resolve("KEY").unwrap().unwrap();
        assert_eq!(resolved.source, ConfigSource::Env);
        assert_eq!(resolved.value, "from-env");
    }

    #[test]
    fn empty_setting_without_env_is_absent() {
        let settings = MapSettings::new().with("KEY", "");
        let env = MapEnv::new();
        let layered = LayeredSettings::new(&settings, &env);

        assert_eq!(layered.get("KEY").unwrap(), None);
    }

    #[test]
    fn empty_env_value_is_kept() {
        let settings = MapSettings::new();
        let env = MapEnv::new().with("KEY", "");
        let layered = LayeredSettings::new(&settings, &env);

        assert_eq!(layered.get("KEY").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn provider_fault_is_propagated() {
        let env = MapEnv::new().with("KEY", "from-env");
        let layered = LayeredSettings::new(&Unreachable, &env);

        let err = layered.get("KEY").unwrap_err();
        assert!(matches!(err, ConfigError::Provider { ref key, .. } if key == "KEY"));
    }

    proptest! {
        #[test]
        fn non_empty_setting_always_wins(setting in ".+", env_value in ".*") {
            let settings = MapSettings::new().with("KEY", setting.clone());
            let env = MapEnv::new().with("KEY", env_value);
            let layered = LayeredSettings::new(&settings, &env);

            prop_assert_eq!(layered.get("KEY").unwrap(), Some(setting));
        }
    }
}
