//! Prelude module for convenient imports.
//!
//! `use cronoszkevm_validator::prelude::*;` brings in the traits, error types,
//! built-in validators and combinators.

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

pub use crate::validators::*;

pub use crate::combinators::{WithMessage, with_message};
