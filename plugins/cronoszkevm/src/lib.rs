//! # Cronos zkEVM plugin
//!
//! Configuration for the Cronos zkEVM agent plugin.
//!
//! The plugin needs two settings, `CRONOSZKEVM_ADDRESS` and
//! `CRONOSZKEVM_PRIVATE_KEY`. Each is read from the host's settings provider
//! and, when absent or empty there, from the process environment.
//! [`validate_cronos_zkevm_config`] either returns a [`CronosZkEvmConfig`]
//! with both values present, or one [`CronosZkEvmConfigError`] naming every
//! missing value.
//!
//! ```rust
//! use cronoszkevm_config::{MapEnv, MapSettings};
//! use cronoszkevm_plugin::{CronosZkEvmConfigError, validate_cronos_zkevm_config};
//!
//! let settings = MapSettings::new().with("CRONOSZKEVM_ADDRESS", "0xABC");
//! let env = MapEnv::new();
//!
//! let err = validate_cronos_zkevm_config(&settings, &env).unwrap_err();
//! assert!(matches!(err, CronosZkEvmConfigError::Validation(_)));
//! assert_eq!(
//!     err.to_string(),
//!     "CronosZkEVM configuration validation failed:\n\
//!      CRONOSZKEVM_PRIVATE_KEY: Cronos zkEVM private key is required"
//! );
//! ```

#![warn(missing_docs)]

mod config;
mod environment;
mod error;

pub use config::CronosZkEvmConfig;
pub use environment::{
    ADDRESS_REQUIRED, CRONOSZKEVM_ADDRESS, CRONOSZKEVM_PRIVATE_KEY, PRIVATE_KEY_REQUIRED,
    RawCronosZkEvmConfig, schema, validate_cronos_zkevm_config,
    validate_cronos_zkevm_config_async, validate_from_runtime,
};
pub use error::CronosZkEvmConfigError;

pub use secrecy::{ExposeSecret, SecretString};
