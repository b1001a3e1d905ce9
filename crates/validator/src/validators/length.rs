//! String length validators
//!
//! Length is measured in Unicode scalar values (chars) by default.
//! Use the `.bytes()` constructors for byte-length counting.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a string is not empty.
///
/// Equivalent to `MinLength::new(1)` but reads better at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotEmpty;

impl Validate for NotEmpty {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::new("not_empty", "String must not be empty"))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NotEmpty`] validator.
#[must_use]
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a string has at least a minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    /// Minimum length (inclusive).
    pub min: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl MinLength {
    /// Creates a minimum length validator counting chars.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Chars,
        }
    }

    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

impl Validate for MinLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = self.mode.measure(input);
        if len >= self.min {
            Ok(())
        } else {
            Err(ValidationError::min_length(self.min, len))
        }
    }
}

/// Creates a [`MinLength`] validator.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a string does not exceed a maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    /// Maximum length (inclusive).
    pub max: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl MaxLength {
    /// Creates a maximum length validator counting chars.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Chars,
        }
    }

    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

impl Validate for MaxLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = self.mode.measure(input);
        if len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::max_length(self.max, len))
        }
    }
}

/// Creates a [`MaxLength`] validator.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}
