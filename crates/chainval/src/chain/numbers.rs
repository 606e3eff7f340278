//! Numeric rules: type checks and the comparison family.
//!
//! Comparisons require a numeric cell (`Int` or `Float`) and compare through
//! [`Number`], so `Int(5)` and `Float(5.0)` are the same quantity.

use crate::chain::{ChainResult, Validator};
use crate::foundation::{Number, ValidationError};

impl Validator {
    /// Checks that the value is an integer.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// assert!(Validator::new(19).is_int("not an integer").is_ok());
    /// assert!(Validator::new(1.5).is_int("not an integer").is_err());
    /// assert!(Validator::new("1").is_int("not an integer").is_err());
    /// ```
    pub fn is_int(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_int() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the value is a float.
    pub fn is_float(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_float() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Shared body of the comparison family: require a numeric cell, then
    /// test the quantity.
    fn compare(
        self,
        fail: impl Into<ValidationError>,
        test: impl FnOnce(Number) -> bool,
    ) -> ChainResult {
        self.rule(|cell| {
            let Some(quantity) = cell.get().as_number() else {
                return Err(fail.into());
            };
            if test(quantity) { Ok(()) } else { Err(fail.into()) }
        })
    }

    /// Checks that the number is strictly greater than `value`.
    pub fn is_greater_than(
        self,
        value: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let value = value.into();
        self.compare(fail, |quantity| quantity > value)
    }

    /// Checks that the number is at least `value`.
    pub fn is_greater_than_or_equal(
        self,
        value: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let value = value.into();
        self.compare(fail, |quantity| quantity >= value)
    }

    /// Checks that the number is strictly less than `value`.
    pub fn is_less_than(
        self,
        value: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let value = value.into();
        self.compare(fail, |quantity| quantity < value)
    }

    /// Checks that the number is at most `value`.
    pub fn is_less_than_or_equal(
        self,
        value: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let value = value.into();
        self.compare(fail, |quantity| quantity <= value)
    }

    /// Checks that the number equals `value` (`Int` and `Float` compare by
    /// quantity, so `5` equals `5.0`).
    pub fn is_equal(
        self,
        value: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let value = value.into();
        self.compare(fail, |quantity| quantity == value)
    }

    /// Checks that the number does not equal `value`.
    pub fn is_not_equal(
        self,
        value: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let value = value.into();
        self.compare(fail, |quantity| quantity != value)
    }

    /// Checks that the number lies in `[min, max]` (inclusive).
    pub fn is_between(
        self,
        min: impl Into<Number>,
        max: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let (min, max) = (min.into(), max.into());
        self.compare(fail, |quantity| quantity >= min && quantity <= max)
    }

    /// Checks that the number lies outside `[min, max]`.
    pub fn is_not_between(
        self,
        min: impl Into<Number>,
        max: impl Into<Number>,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        let (min, max) = (min.into(), max.into());
        self.compare(fail, |quantity| quantity < min || quantity > max)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;

    #[test]
    fn type_checks_are_exact() {
        assert!(Validator::new(1).is_int("fail").is_ok());
        assert!(Validator::new(1.1).is_int("fail").is_err());
        assert!(Validator::new(1.1).is_float("fail").is_ok());
        assert!(Validator::new(1).is_float("fail").is_err());
        assert!(Validator::new("1").is_int("fail").is_err());
        assert!(Validator::new(true).is_int("fail").is_err());
    }

    #[test]
    fn ordering_comparisons() {
        assert!(Validator::new(10).is_greater_than(9, "fail").is_ok());
        assert!(Validator::new(10).is_greater_than(10, "fail").is_err());
        assert!(Validator::new(10).is_greater_than_or_equal(10, "fail").is_ok());
        assert!(Validator::new(10).is_less_than(11, "fail").is_ok());
        assert!(Validator::new(10).is_less_than(10, "fail").is_err());
        assert!(Validator::new(10).is_less_than_or_equal(10, "fail").is_ok());
    }

    #[test]
    fn comparisons_mix_int_and_float() {
        assert!(Validator::new(2.5).is_greater_than(2, "fail").is_ok());
        assert!(Validator::new(2).is_less_than(2.5, "fail").is_ok());
        assert!(Validator::new(5).is_equal(5.0, "fail").is_ok());
        assert!(Validator::new(5.0).is_equal(5, "fail").is_ok());
        assert!(Validator::new(5).is_not_equal(5.5, "fail").is_ok());
        assert!(Validator::new(5).is_not_equal(5, "fail").is_err());
    }

    #[test]
    fn between_is_inclusive() {
        assert!(Validator::new(5).is_between(5, 10, "fail").is_ok());
        assert!(Validator::new(10).is_between(5, 10, "fail").is_ok());
        assert!(Validator::new(4).is_between(5, 10, "fail").is_err());
        assert!(Validator::new(4).is_not_between(5, 10, "fail").is_ok());
        assert!(Validator::new(7).is_not_between(5, 10, "fail").is_err());
    }

    #[test]
    fn comparisons_require_a_number() {
        assert!(Validator::new("10").is_greater_than(1, "fail").is_err());
        assert!(Validator::new(Value::Null).is_between(0, 1, "fail").is_err());
    }

    #[test]
    fn locked_chain_skips_comparisons() {
        let value = Validator::new(0)
            .optional()
            .is_int("unreachable")
            .and_then(|v| v.is_greater_than(100, "unreachable"))
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value, Value::Null);
    }
}
