//! Membership and uniqueness rules.
//!
//! Unlike every other rule, the three methods here do not consult the lock
//! guard: they run against the externally visible value even when the cell
//! is locked. The asymmetry is long-standing observed behavior that callers
//! may depend on; it is pinned by tests rather than silently unified.

use crate::chain::{ChainResult, Validator};
use crate::foundation::{ValidationError, Value};

impl Validator {
    /// Checks that the value is one of `values`.
    ///
    /// Runs even when the cell is locked, in which case it tests the locked
    /// default.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// let allowed = [Value::from("male"), Value::from("female")];
    /// assert!(Validator::new("male").is_one_of(&allowed, "bad gender").is_ok());
    /// assert!(Validator::new("other").is_one_of(&allowed, "bad gender").is_err());
    /// ```
    pub fn is_one_of(self, values: &[Value], fail: impl Into<ValidationError>) -> ChainResult {
        if values.contains(self.get()) {
            Ok(self)
        } else {
            Err(fail.into())
        }
    }

    /// Checks that the value is none of `values`. Runs even when the cell is
    /// locked.
    pub fn is_not_one_of(self, values: &[Value], fail: impl Into<ValidationError>) -> ChainResult {
        if values.contains(self.get()) {
            Err(fail.into())
        } else {
            Ok(self)
        }
    }

    /// Checks that the value is a collection whose elements (list entries or
    /// map values) are pairwise distinct.
    pub fn is_unique(self, fail: impl Into<ValidationError>) -> ChainResult {
        // TODO: this runs even when the cell is locked, so an
        // optional-and-absent chain fails here (the locked default is not a
        // collection) instead of short-circuiting like every guarded rule;
        // confirm with product whether that is intended before unifying it
        // with the guarded path.
        let distinct = match self.get() {
            Value::List(items) => pairwise_distinct(items.iter()),
            Value::Map(entries) => pairwise_distinct(entries.values()),
            _ => return Err(fail.into()),
        };
        if distinct { Ok(self) } else { Err(fail.into()) }
    }
}

fn pairwise_distinct<'a>(items: impl Iterator<Item = &'a Value>) -> bool {
    // Value is not hashable (floats), so uniqueness is a pairwise scan.
    let seen: Vec<&Value> = items.collect();
    seen.iter()
        .enumerate()
        .all(|(at, value)| seen[..at].iter().all(|earlier| earlier != value))
}

// ============================================================================
// TESTS
// ============================================================================
