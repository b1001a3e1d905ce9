//! # cronoszkevm-config
//!
//! Settings lookup for agent plugins.
//!
//! A plugin reads each named setting from the host's [`SettingsProvider`]
//! first and falls back to the equivalently named environment variable
//! through an injected [`EnvLookup`]. [`LayeredSettings`] applies that
//! precedence; [`RecordSchema`] validates the resolved values and reports
//! every failing field at once.
//!
//! ```rust
//! use cronoszkevm_config::{LayeredSettings, MapEnv, MapSettings};
//!
//! let settings = MapSettings::new().with("API_URL", "https://rpc.example");
//! let env = MapEnv::new().with("API_URL", "ignored").with("API_KEY", "k");
//! let layered = LayeredSettings::new(&settings, &env);
//!
//! assert_eq!(layered.get("API_URL").unwrap().as_deref(), Some("https://rpc.example"));
//! assert_eq!(layered.get("API_KEY").unwrap().as_deref(), Some("k"));
//! assert_eq!(layered.get("MISSING").unwrap(), None);
//! ```

pub mod core;
pub mod loaders;
pub mod validators;

pub use crate::core::{
    ConfigError, ConfigResult, ConfigSource, EnvLookup, LayeredSettings, Resolved,
    SettingsProvider,
};
#[cfg(feature = "toml")]
pub use loaders::TomlSettings;
pub use loaders::{MapEnv, MapSettings, ProcessEnv};
pub use validators::{FieldSchema, RecordSchema};
