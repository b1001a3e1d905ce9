//! Settings provider implementations

mod env;
#[cfg(feature = "toml")]
pub(crate) mod file;
mod memory;

pub use env::{MapEnv, ProcessEnv};
#[cfg(feature = "toml")]
pub use file::TomlSettings;
pub use memory::MapSettings;

// Re-export traits from core for convenience
pub use crate::core::{EnvLookup, SettingsProvider};
