//! `min` / `max` over the derived comparable quantity.
//!
//! The same two rules serve three domains: strings compare by character
//! count, collections by element count, numbers by their own value. The
//! branch is picked from the cell's runtime kind at call time, not from any
//! declared type.

use crate::chain::{ChainResult, Validator};
use crate::foundation::{Number, ValidationError, Value};

/// The quantity `min`/`max` compare for a given value. Null, booleans and
/// dates measure zero (long-standing loose behavior, kept rather than
/// hardened into a type error).
fn measure(value: &Value) -> Number {
    match value {
        Value::String(s) => Number::Int(s.chars().count() as i64),
        Value::List(items) => Number::Int(items.len() as i64),
        Value::Map(entries) => Number::Int(entries.len() as i64),
        Value::Int(i) => Number::Int(*i),
        Value::Float(f) => Number::Float(*f),
        Value::Null | Value::Bool(_) | Value::Date(_) => Number::Int(0),
    }
}

impl Validator {
    /// Checks that the derived quantity is at least `min`.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// assert!(Validator::new("abc").min(3, "too short").is_ok());
    /// assert!(Validator::new("abc").min(4, "too short").is_err());
    /// assert!(Validator::new(vec![1, 2]).min(2, "too few").is_ok());
    /// assert!(Validator::new(19).min(13, "too young").is_ok());
    /// ```
    pub fn min(self, min: i64, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if measure(cell.get()) < Number::Int(min) {
                Err(fail.into())
            } else {
                Ok(())
            }
        })
    }

    /// Checks that the derived quantity is at most `max`.
    pub fn max(self, max: i64, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if measure(cell.get()) > Number::Int(max) {
                Err(fail.into())
            } else {
                Ok(())
            }
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
