//! Core validation types and traits
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! Validators are generic over their input type:
//!
//! ```rust
//! use cronoszkevm_validator::foundation::{Validate, ValidationError};
//!
//! struct StartsWith0x;
//!
//! impl Validate for StartsWith0x {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.starts_with("0x") {
//!             Ok(())
//!         } else {
//!             Err(ValidationError::new("hex_prefix", "Must start with 0x"))
//!         }
//!     }
//! }
//!
//! assert!(StartsWith0x.validate("0x1").is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
