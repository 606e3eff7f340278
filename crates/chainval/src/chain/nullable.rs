//! Null checks.

use crate::chain::{ChainResult, Validator};
use crate::foundation::ValidationError;

impl Validator {
    /// Checks that the value is null.
    pub fn is_null(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_null() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the value is not null.
    pub fn is_not_null(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_null() {
                Err(fail.into())
            } else {
                Ok(())
            }
        })
    }
}
