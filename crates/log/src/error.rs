//! Logging errors

/// Result alias for logging setup
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level / directive string could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// The output format name is unknown.
    #[error("unknown log format '{0}' (expected compact, pretty or json)")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}
