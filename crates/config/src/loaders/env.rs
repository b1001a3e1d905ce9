//! Environment variable lookups

use std::collections::BTreeMap;
use std::env::VarError;

use crate::core::{ConfigError, ConfigResult, EnvLookup};

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::env(key, "value is not valid UTF-8")),
        }
    }
}

/// A fixed environment, for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.vars.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_lookup() {
        let env: MapEnv = [("CRONOSZKEVM_ADDRESS", "0x1")].into_iter().collect();
        assert_eq!(
            env.var("CRONOSZKEVM_ADDRESS").unwrap().as_deref(),
            Some("0x1")
        );
        assert_eq!(env.var("CRONOSZKEVM_PRIVATE_KEY").unwrap(), None);
    }

    #[test]
    fn process_env_reports_missing_as_none() {
        let key = "CRONOSZKEVM_CONFIG_TEST_SURELY_UNSET_2F9A";
        assert_eq!(ProcessEnv.var(key).unwrap(), None);
    }
}
