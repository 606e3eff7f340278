//! The mutable container a validation chain works against.
//!
//! A [`ValueCell`] holds one [`Value`] plus a lock flag with a locked-default
//! value. While locked, external reads observe the default instead of the
//! underlying value; this is the mechanism behind the optional/short-circuit
//! protocol: a field marked optional-and-absent locks its cell, every later
//! rule no-ops, and the chain resolves to the default.

use crate::foundation::Value;

// ============================================================================
// VALUE CELL
// ============================================================================

/// One mutable value plus its lock state.
///
/// Invariant: while `locked` is set, [`get`](Self::get) returns the locked
/// default regardless of the underlying value. [`set`](Self::set) still
/// writes the underlying value — the write simply is not observable until
/// [`unlock`](Self::unlock) discards the default again.
///
/// ```
/// use chainval::foundation::{Value, ValueCell};
///
/// let mut cell = ValueCell::new("foo");
/// cell.lock("bar");
/// assert_eq!(cell.get(), &Value::from("bar"));
/// cell.unlock();
/// assert_eq!(cell.get(), &Value::from("foo"));
/// ```
#[derive(Debug, Clone)]
pub struct ValueCell {
    value: Value,
    locked: bool,
    locked_default: Value,
}

impl ValueCell {
    /// Wraps a raw value. Unlocked, with a `Null` locked-default.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            locked: false,
            locked_default: Value::Null,
        }
    }

    /// The externally visible value: the locked default while locked,
    /// otherwise the underlying value.
    #[must_use]
    pub fn get(&self) -> &Value {
        if self.locked {
            &self.locked_default
        } else {
            &self.value
        }
    }

    /// Overwrites the underlying value. Always writes, even while locked.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Moves the underlying value out, leaving `Null` behind. Ignores the
    /// lock, like [`set`](Self::set) and the type predicates.
    #[must_use]
    pub fn take(&mut self) -> Value {
        std::mem::replace(&mut self.value, Value::Null)
    }

    /// Locks the cell with the given default. Idempotent; a repeated call
    /// overwrites the default.
    pub fn lock(&mut self, default: impl Into<Value>) {
        self.locked = true;
        self.locked_default = default.into();
    }

    /// Unlocks the cell; the underlying value (including any writes made
    /// while locked) becomes visible again.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Consumes the cell, honoring the lock the way [`get`](Self::get) does.
    #[must_use]
    pub fn into_value(self) -> Value {
        if self.locked {
            self.locked_default
        } else {
            self.value
        }
    }

    // ------------------------------------------------------------------------
    // Type predicates
    //
    // These inspect the RAW underlying value, ignoring the lock. The chain
    // uses them to decide which check applies, and must see the true value
    // even when the cell is locked; only `get` substitutes the default.
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn is_string(&self) -> bool {
        self.value.is_string()
    }

    #[must_use]
    pub fn is_int(&self) -> bool {
        self.value.is_int()
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        self.value.is_float()
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.value.is_bool()
    }

    #[must_use]
    pub fn is_array_like(&self) -> bool {
        self.value.is_array_like()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    #[must_use]
    pub fn is_date(&self) -> bool {
        self.value.is_date()
    }
}

// ============================================================================
// TESTS
// ============================================================================
