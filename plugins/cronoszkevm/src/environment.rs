//! Settings resolution and validation for the plugin.

use std::sync::LazyLock;

use cronoszkevm_config::{
    ConfigResult, EnvLookup, FieldSchema, LayeredSettings, ProcessEnv, RecordSchema,
    SettingsProvider,
};
use cronoszkevm_validator::foundation::{ValidateExt, ValidationError, ValidationErrors};
use cronoszkevm_validator::validators::min_length;

use crate::{CronosZkEvmConfig, CronosZkEvmConfigError};

/// Setting / environment key holding the account address.
pub const CRONOSZKEVM_ADDRESS: &str = "CRONOSZKEVM_ADDRESS";

/// Setting / environment key holding the account private key.
pub const CRONOSZKEVM_PRIVATE_KEY: &str = "CRONOSZKEVM_PRIVATE_KEY";

/// Reported when the address is missing or empty.
pub const ADDRESS_REQUIRED: &str = "Cronos zkEVM address is required";

/// Reported when the private key is missing or empty.
pub const PRIVATE_KEY_REQUIRED: &str = "Cronos zkEVM private key is required";

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::new()
        .field(
            FieldSchema::new(CRONOSZKEVM_ADDRESS)
                .required_message(ADDRESS_REQUIRED)
                .rule(min_length(1).with_message(ADDRESS_REQUIRED)),
        )
        .field(
            FieldSchema::new(CRONOSZKEVM_PRIVATE_KEY)
                .required_message(PRIVATE_KEY_REQUIRED)
                .rule(min_length(1).with_message(PRIVATE_KEY_REQUIRED)),
        )
});

/// The plugin's settings schema: both keys required, both non-empty.
pub fn schema() -> &'static RecordSchema {
    &SCHEMA
}

/// Settings as read from the sources, before validation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawCronosZkEvmConfig {
    /// Resolved `CRONOSZKEVM_ADDRESS`
    pub address: Option<String>,
    /// Resolved `CRONOSZKEVM_PRIVATE_KEY`
    pub private_key: Option<String>,
}

impl RawCronosZkEvmConfig {
    /// Read both keys, settings first, environment as fallback.
    pub fn from_sources(
        settings: &dyn SettingsProvider,
        env: &dyn EnvLookup,
    ) -> ConfigResult<Self> {
        let layered = LayeredSettings::new(settings, env);
        Ok(Self {
            address: layered.get(CRONOSZKEVM_ADDRESS)?,
            private_key: layered.get(CRONOSZKEVM_PRIVATE_KEY)?,
        })
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            CRONOSZKEVM_ADDRESS => self.address.as_deref(),
            CRONOSZKEVM_PRIVATE_KEY => self.private_key.as_deref(),
            _ => None,
        }
    }

    /// Apply [`schema`] and build the validated record.
    ///
    /// Every failing field is reported, not only the first.
    pub fn validate(self) -> Result<CronosZkEvmConfig, ValidationErrors> {
        schema().validate(|key| self.lookup(key))?;

        match (self.address, self.private_key) {
            (Some(address), Some(private_key)) => {
                Ok(CronosZkEvmConfig::new(address, private_key))
            }
            (address, private_key) => Err([
                (CRONOSZKEVM_ADDRESS, ADDRESS_REQUIRED, address.is_none()),
                (CRONOSZKEVM_PRIVATE_KEY, PRIVATE_KEY_REQUIRED, private_key.is_none()),
            ]
            .into_iter()
            .filter(|&(_, _, missing)| missing)
            .map(|(key, message, _)| ValidationError::new("required", message).with_field(key))
            .collect()),
        }
    }
}

impl std::fmt::Debug for RawCronosZkEvmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawCronosZkEvmConfig")
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Validate the plugin configuration.
///
/// Each key is read from `settings`, falling back to `env` when the setting
/// is absent or empty. Missing or empty values are reported together as
/// [`CronosZkEvmConfigError::Validation`]; a failing provider or an
/// unreadable environment variable is returned unchanged as
/// [`CronosZkEvmConfigError::Config`].
pub fn validate_cronos_zkevm_config(
    settings: &dyn SettingsProvider,
    env: &dyn EnvLookup,
) -> Result<CronosZkEvmConfig, CronosZkEvmConfigError> {
    let raw = RawCronosZkEvmConfig::from_sources(settings, env)?;
    let config = raw.validate().map_err(CronosZkEvmConfigError::Validation)?;

    cronoszkevm_log::debug!(address = config.address(), "Cronos zkEVM configuration validated");
    Ok(config)
}

/// [`validate_cronos_zkevm_config`] for hosts that await plugin setup.
///
/// Completes without suspending.
pub async fn validate_cronos_zkevm_config_async(
    settings: &dyn SettingsProvider,
    env: &dyn EnvLookup,
) -> Result<CronosZkEvmConfig, CronosZkEvmConfigError> {
    validate_cronos_zkevm_config(settings, env)
}

/// Validate against the host settings and the real process environment.
pub fn validate_from_runtime(
    settings: &dyn SettingsProvider,
) -> Result<CronosZkEvmConfig, CronosZkEvmConfigError> {
    validate_cronos_zkevm_config(settings, &ProcessEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_address_first() {
        assert_eq!(
            schema().keys().collect::<Vec<_>>(),
            [CRONOSZKEVM_ADDRESS, CRONOSZKEVM_PRIVATE_KEY]
        );
    }

    #[test]
    fn raw_validate_keeps_values_unmodified() {
        let raw = RawCronosZkEvmConfig {
            address: Some(" 0xABC ".into()),
            private_key: Some("k".into()),
        };
        let config = raw.validate().unwrap();
        assert_eq!(config.address(), " 0xABC ");
    }

    #[test]
    fn raw_validate_reports_absent_fields_as_errors() {
        let errors = RawCronosZkEvmConfig::default().validate().unwrap_err();

        let codes: Vec<&str> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["required", "required"]);
        assert_eq!(
            errors.to_string(),
            format!(
                "{CRONOSZKEVM_ADDRESS}: {ADDRESS_REQUIRED}\n\
                 {CRONOSZKEVM_PRIVATE_KEY}: {PRIVATE_KEY_REQUIRED}"
            )
        );
    }

    #[test]
    fn raw_debug_redacts_private_key() {
        let raw = RawCronosZkEvmConfig {
            address: None,
            private_key: Some("leak-me".into()),
        };
        let debug = format!("{raw:?}");
        assert!(!debug.contains("leak-me"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn empty_private_key_reports_min_length() {
        let raw = RawCronosZkEvmConfig {
            address: Some("0x1".into()),
            private_key: Some(String::new()),
        };
        let errors = raw.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].code, "min_length");
        assert_eq!(errors.errors()[0].message, PRIVATE_KEY_REQUIRED);
    }
}
