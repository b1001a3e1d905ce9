//! # cronoszkevm-log
//!
//! Logging bootstrap shared by the workspace.
//!
//! Library crates log through the re-exported `tracing` macros
//! (`cronoszkevm_log::debug!` and friends). Binaries install a subscriber
//! once at startup:
//!
//! ```rust,no_run
//! fn main() -> Result<(), cronoszkevm_log::LogError> {
//!     cronoszkevm_log::init()?;
//!     cronoszkevm_log::info!("ready");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
mod error;
mod macros;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

pub use tracing::{Level, debug, error, info, instrument, trace, warn};

/// Install a global subscriber configured from the environment.
///
/// See [`Config::from_env`] for the variables read.
pub fn init() -> LogResult<()> {
    LoggerBuilder::from_config(Config::from_env()).build()
}
