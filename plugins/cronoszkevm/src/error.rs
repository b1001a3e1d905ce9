//! Plugin configuration errors.

use cronoszkevm_config::ConfigError;
use cronoszkevm_validator::foundation::ValidationErrors;

/// Why [`validate_cronos_zkevm_config`](crate::validate_cronos_zkevm_config)
/// failed.
#[derive(Debug, thiserror::Error)]
pub enum CronosZkEvmConfigError {
    /// One or more settings are missing or empty.
    ///
    /// Holds one error per offending field, in declaration order; the
    /// message lists each as `<key>: <message>` on its own line.
    #[error("CronosZkEVM configuration validation failed:\n{0}")]
    Validation(ValidationErrors),

    /// Reading the settings failed for a reason unrelated to their content.
    /// Displayed exactly as the underlying error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CronosZkEvmConfigError {
    /// Field errors, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Config(_) => None,
        }
    }

    /// Keys of the fields that failed validation.
    pub fn failed_fields(&self) -> Vec<&str> {
        self.validation_errors()
            .map(|errors| {
                errors
                    .errors()
                    .iter()
                    .filter_map(|e| e.field.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}
