//! Configuration error type

use std::path::PathBuf;

/// Standard result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Faults raised while reading settings.
///
/// These are distinct from field validation failures, which are reported as
/// [`ValidationErrors`](cronoszkevm_validator::foundation::ValidationErrors).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The host settings provider could not answer.
    #[error("settings provider failed to read '{key}': {message}")]
    Provider {
        /// Setting key being read
        key: String,
        /// Provider-supplied reason
        message: String,
    },

    /// An environment variable exists but cannot be used.
    #[error("environment variable '{key}' is unusable: {message}")]
    Env {
        /// Variable name
        key: String,
        /// Reason
        message: String,
    },

    /// Reading a settings file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A settings document could not be parsed.
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// Where the document came from
        origin: String,
        /// Parser message
        message: String,
    },
}

impl ConfigError {
    /// Create a provider error
    pub fn provider(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an environment error
    pub fn env(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Env {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// The setting or variable key the error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Provider { key, .. } | Self::Env { key, .. } => Some(key),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}
