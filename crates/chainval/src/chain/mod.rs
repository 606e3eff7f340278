//! The fluent validation chain.
//!
//! A [`Validator`] wraps one [`ValueCell`] and exposes every rule as a
//! chainable method: each consumes the validator and hands it back inside a
//! `Result`, so chains compose with `?` and end in a terminal
//! [`get`](Validator::get) / [`into_value`](Validator::into_value):
//!
//! ```
//! use chainval::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let name = Validator::new("  Ada  ")
//!     .is_string("name must be a string")?
//!     .clean_string("name must be a string")?
//!     .min(1, "name is required")?
//!     .into_value();
//! assert_eq!(name.as_str(), Some("Ada"));
//! # Ok(())
//! # }
//! ```
//!
//! # The lock guard
//!
//! Every rule dispatches through a single guard: when the cell is locked the
//! rule returns the chain untouched — no check, no mutation, no error. The
//! [`optional`](Validator::optional) family locks the cell when the value is
//! absent, which is how an optional-and-absent field passes all downstream
//! rules vacuously and resolves to its default:
//!
//! ```
//! use chainval::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let value = Validator::new(Value::Null)
//!     .optional()
//!     .is_string("never raised")?
//!     .min(100, "never raised")?
//!     .into_value();
//! assert_eq!(value, Value::Null);
//! # Ok(())
//! # }
//! ```
//!
//! Rule methods are grouped by the kind of value they check, one module per
//! group (strings, numbers, booleans, dates, arrays, nullable, membership,
//! size) — all of them `impl Validator` blocks on this one type.
//!
//! A `Validator` is a plain owned value: independent instances are freely
//! usable from independent threads, but one instance cannot be shared — every
//! method takes `self` by value.

mod arrays;
mod booleans;
mod dates;
mod membership;
mod nullable;
mod numbers;
mod size;
mod strings;

pub use arrays::Shape;

use crate::foundation::{Value, ValueCell, ValidationError};

/// The result of one chain step: the validator moved along, or the first
/// validation failure.
pub type ChainResult = Result<Validator, ValidationError>;

// ============================================================================
// VALIDATOR
// ============================================================================

/// A fluent validation chain over one [`ValueCell`].
///
/// Construct it over a raw value (the common case) or adopt an existing
/// cell with [`from_cell`](Validator::from_cell) to layer validators without
/// copying the value. The validator's entire externally visible state is
/// `get()`.
#[derive(Debug)]
pub struct Validator {
    cell: ValueCell,
}

impl Validator {
    /// Wraps a raw value in a fresh, unlocked cell.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            cell: ValueCell::new(value),
        }
    }

    /// Adopts an existing cell, lock state included.
    #[must_use]
    pub fn from_cell(cell: ValueCell) -> Self {
        Self { cell }
    }

    /// The current externally visible value (the locked default while the
    /// cell is locked).
    #[must_use]
    pub fn get(&self) -> &Value {
        self.cell.get()
    }

    /// Consumes the chain, yielding the final validated value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.cell.into_value()
    }

    /// Consumes the chain, yielding the underlying cell.
    #[must_use]
    pub fn into_cell(self) -> ValueCell {
        self.cell
    }

    /// The single lock guard every fallible rule dispatches through: locked
    /// cells short-circuit, unlocked cells run the check against the cell.
    pub(crate) fn rule(
        mut self,
        check: impl FnOnce(&mut ValueCell) -> Result<(), ValidationError>,
    ) -> ChainResult {
        if self.cell.is_locked() {
            return Ok(self);
        }
        check(&mut self.cell)?;
        Ok(self)
    }

    /// Infallible counterpart of [`rule`](Self::rule) for pure mutations.
    fn apply(mut self, mutate: impl FnOnce(&mut ValueCell)) -> Self {
        if !self.cell.is_locked() {
            mutate(&mut self.cell);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Optional / lock protocol
    // ------------------------------------------------------------------------

    /// Marks the value as optional: if it is currently absent (loose
    /// emptiness — null, `""`, an empty collection, `false`, or zero), the
    /// cell locks with a `Null` default and every later rule no-ops.
    #[must_use]
    pub fn optional(self) -> Self {
        self.optional_or(Value::Null)
    }

    /// Like [`optional`](Self::optional), resolving to `default` instead of
    /// `Null` when the value is absent.
    #[must_use]
    pub fn optional_or(mut self, default: impl Into<Value>) -> Self {
        if self.cell.get().is_falsy() {
            self.cell.lock(default);
        }
        self
    }

    /// Marks the value as optional when the condition holds, regardless of
    /// the current value.
    #[must_use]
    pub fn optional_if(self, condition: bool) -> Self {
        self.optional_if_or(condition, Value::Null)
    }

    /// Like [`optional_if`](Self::optional_if) with an explicit default.
    #[must_use]
    pub fn optional_if_or(mut self, condition: bool, default: impl Into<Value>) -> Self {
        if condition {
            self.cell.lock(default);
        }
        self
    }

    /// Lazy flavor of [`optional_if`](Self::optional_if): evaluates the
    /// predicate on the spot.
    #[must_use]
    pub fn optional_if_with(self, condition: impl FnOnce() -> bool) -> Self {
        self.optional_if(condition())
    }

    // ------------------------------------------------------------------------
    // Custom hooks
    // ------------------------------------------------------------------------

    /// Replaces the value with the result of a custom callback. Like every
    /// guarded rule, a locked chain passes through unchanged.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// let value = Validator::new("TEST")
    ///     .transform(|v| match v {
    ///         Value::String(s) => Value::String(s.to_lowercase()),
    ///         other => other,
    ///     })
    ///     .into_value();
    /// assert_eq!(value.as_str(), Some("test"));
    /// ```
    #[must_use]
    pub fn transform(self, f: impl FnOnce(Value) -> Value) -> Self {
        self.apply(|cell| {
            let current = cell.take();
            cell.set(f(current));
        })
    }

    /// Runs a custom check against the current value; its error propagates
    /// like any built-in rule's.
    pub fn validate(self, check: impl FnOnce(&Value) -> Result<(), ValidationError>) -> ChainResult {
        self.rule(|cell| check(cell.get()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
