//! Date rules: parsing strings into dates and comparing them.
//!
//! `is_date` is a transform: it requires a string, parses it, and writes the
//! parsed [`Value::Date`] back into the cell, so later date comparisons (and
//! the terminal `get`) see the parsed value. Offsets in RFC 3339 input are
//! normalized to UTC before the offset is dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::chain::{ChainResult, Validator};
use crate::foundation::{ValidationError, Value};

/// Formats accepted by [`Validator::is_date`], tried in order after RFC 3339.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

fn parse_date(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

impl Validator {
    /// Checks that the value is a date string and replaces it with the
    /// parsed date. Accepts RFC 3339 plus a few common layouts; a date
    /// without a time component parses as midnight.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// # fn main() -> Result<(), ValidationError> {
    /// let value = Validator::new("2024-05-17")
    ///     .is_date("not a date")?
    ///     .into_value();
    /// assert!(value.is_date());
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_date(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            let Some(parsed) = parse_date(s) else {
                return Err(fail.into());
            };
            cell.set(Value::Date(parsed));
            Ok(())
        })
    }

    /// Checks that the date is strictly before `date`. Requires a parsed
    /// date (chain [`is_date`](Self::is_date) first).
    pub fn is_before_date(
        self,
        date: NaiveDateTime,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        self.rule(|cell| {
            let Some(current) = cell.get().as_date() else {
                return Err(fail.into());
            };
            if current < date { Ok(()) } else { Err(fail.into()) }
        })
    }

    /// Checks that the date is strictly after `date`.
    pub fn is_after_date(
        self,
        date: NaiveDateTime,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        self.rule(|cell| {
            let Some(current) = cell.get().as_date() else {
                return Err(fail.into());
            };
            if current > date { Ok(()) } else { Err(fail.into()) }
        })
    }

    /// Checks that the date lies in `[min, max]` (inclusive).
    pub fn is_between_dates(
        self,
        min: NaiveDateTime,
        max: NaiveDateTime,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        self.rule(|cell| {
            let Some(current) = cell.get().as_date() else {
                return Err(fail.into());
            };
            if current >= min && current <= max {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the date lies outside `[min, max]`.
    pub fn is_not_between_dates(
        self,
        min: NaiveDateTime,
        max: NaiveDateTime,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        self.rule(|cell| {
            let Some(current) = cell.get().as_date() else {
                return Err(fail.into());
            };
            if current < min || current > max {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .expect("valid fixture date")
    }

    #[test]
    fn parses_common_layouts() {
        assert_eq!(parse_date("2024-05-17T08:30:00"), Some(at(2024, 5, 17, 8, 30, 0)));
        assert_eq!(parse_date("2024-05-17 08:30:00"), Some(at(2024, 5, 17, 8, 30, 0)));
        assert_eq!(parse_date("2024-05-17"), Some(at(2024, 5, 17, 0, 0, 0)));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn rfc3339_offsets_normalize_to_utc() {
        assert_eq!(
            parse_date("2024-05-17T08:30:00+02:00"),
            Some(at(2024, 5, 17, 6, 30, 0))
        );
    }

    #[test]
    fn is_date_replaces_the_string_with_the_parsed_date() {
        let value = Validator::new("2024-05-17")
            .is_date("fail")
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value.as_date(), Some(at(2024, 5, 17, 0, 0, 0)));
    }

    #[test]
    fn is_date_requires_a_parseable_string() {
        assert!(Validator::new("yesterday-ish").is_date("fail").is_err());
        assert!(Validator::new(20240517).is_date("fail").is_err());
    }

    #[test]
    fn date_ordering() {
        let v = Validator::new("2024-05-17").is_date("fail").unwrap();
        let v = v.is_after_date(at(2024, 1, 1, 0, 0, 0), "fail").unwrap();
        let v = v.is_before_date(at(2025, 1, 1, 0, 0, 0), "fail").unwrap();
        assert!(
            v.is_before_date(at(2024, 1, 1, 0, 0, 0), "too late")
                .is_err()
        );
    }

    #[test]
    fn date_ranges_are_inclusive() {
        let start = at(2024, 5, 17, 0, 0, 0);
        let v = Validator::new("2024-05-17").is_date("fail").unwrap();
        let v = v
            .is_between_dates(start, at(2024, 6, 1, 0, 0, 0), "fail")
            .unwrap();
        assert!(
            v.is_not_between_dates(start, at(2024, 6, 1, 0, 0, 0), "inside range")
                .is_err()
        );
    }

    #[test]
    fn comparisons_require_a_parsed_date() {
        assert!(
            Validator::new("2024-05-17")
                .is_before_date(at(2025, 1, 1, 0, 0, 0), "fail")
                .is_err()
        );
    }
}
