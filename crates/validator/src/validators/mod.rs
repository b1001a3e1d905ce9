//! Built-in validators

pub mod length;

pub use length::{LengthMode, MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
