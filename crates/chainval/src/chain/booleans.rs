//! Boolean rules.

use crate::chain::{ChainResult, Validator};
use crate::foundation::ValidationError;

impl Validator {
    /// Checks that the value is a boolean.
    pub fn is_bool(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_bool() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the value is `true`.
    pub fn is_true(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().as_bool() == Some(true) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the value is `false`.
    pub fn is_false(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().as_bool() == Some(false) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }
}
