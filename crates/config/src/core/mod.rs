//! Core configuration functionality

pub mod config;
pub mod error;
pub mod source;
pub mod traits;

pub use config::{LayeredSettings, Resolved};
pub use error::{ConfigError, ConfigResult};
pub use source::ConfigSource;
pub use traits::{EnvLookup, SettingsProvider};
