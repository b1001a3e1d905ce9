//! # cronoszkevm-validator
//!
//! A small, composable validation foundation used by the Cronos zkEVM
//! plugin configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use cronoszkevm_validator::prelude::*;
//!
//! let address = min_length(1).with_message("Cronos zkEVM address is required");
//! assert!(address.validate("0xABC").is_ok());
//!
//! let err = address.validate("").unwrap_err();
//! assert_eq!(err.message, "Cronos zkEVM address is required");
//! ```
//!
//! ## Built-in Validators
//!
//! - **String**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`NotEmpty`](validators::NotEmpty)
//! - **Combinators**: [`WithMessage`](combinators::WithMessage)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
