//! The error type raised by failing chain rules.
//!
//! There is exactly one error kind: a human-readable message plus an
//! optional caller-supplied data payload (typically a field path) that
//! pinpoints which part of a composite structure failed. Errors are never
//! caught or retried inside the chain; they unwind through any enclosing
//! recursive array/shape validation to the original caller.
//!
//! The message uses `Cow<'static, str>` for zero allocation in the common
//! case of a literal error message.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Value;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A validation failure with a message and an optional data payload.
///
/// Chain rule methods accept `impl Into<ValidationError>`, so a plain string
/// works wherever an error is expected:
///
/// ```
/// use chainval::prelude::*;
///
/// let err = Validator::new(1)
///     .is_string("value is not a string")
///     .unwrap_err();
/// assert_eq!(err.message(), "value is not a string");
/// ```
///
/// Attach a payload when validating composite input, so the caller can tell
/// which field failed:
///
/// ```
/// use chainval::prelude::*;
///
/// let err = Validator::new(10)
///     .min(13, ValidationError::new("you must be at least 13 years old").with_data("age"))
///     .unwrap_err();
/// assert_eq!(err.data().and_then(Value::as_str), Some("age"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    message: Cow<'static, str>,
    data: Option<Value>,
}

impl ValidationError {
    /// Creates a new validation error with a message and no data payload.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Attaches a data payload (e.g. a field path) to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The data payload, if one was attached.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(data) = &self.data {
            write!(f, "[{data}] {}", self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
