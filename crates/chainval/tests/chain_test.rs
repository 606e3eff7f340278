//! Chain protocol: error carriage, rule families, transforms.

use chainval::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn can_validate_a_string() {
    assert!(Validator::new("test").is_string("not a string").is_ok());
}

#[test]
fn can_reject_an_invalid_string() {
    assert!(Validator::new(1).is_string("not a string").is_err());
}

#[test]
fn can_combine_multiple_validations() {
    let result = Validator::new("test")
        .is_string("not a string")
        .and_then(|v| v.min(2, "too short"))
        .and_then(|v| v.max(4, "too long"));
    assert!(result.is_ok());
}

#[test]
fn the_error_carries_the_message() {
    let err = Validator::new(1).is_string("value is not a string").unwrap_err();
    assert_eq!(err.message(), "value is not a string");
}

#[test]
fn the_error_carries_custom_data() {
    let err = Validator::new(1)
        .is_string(ValidationError::new("value is not a string").with_data("custom_data"))
        .unwrap_err();
    assert_eq!(err.data().and_then(Value::as_str), Some("custom_data"));
    assert_eq!(err.message(), "value is not a string");
}

#[test]
fn validation_leaves_the_value_unchanged() {
    let value = Validator::new("hello world")
        .is_string("not a string")
        .and_then(|v| v.is_lowercase("not lowercase"))
        .and_then(|v| v.min(3, "too short"))
        .and_then(|v| v.max(12, "too long"))
        .map(Validator::into_value)
        .unwrap();
    assert_eq!(value, Value::from("hello world"));
}

#[test]
fn transform_round_trip() {
    let value = Validator::new("TEST")
        .transform(|v| match v {
            Value::String(s) => Value::String(s.to_lowercase()),
            other => other,
        })
        .into_value();
    assert_eq!(value.as_str(), Some("test"));
}

#[test]
fn chains_compose_with_question_mark() {
    fn username(input: &str) -> Result<Value, ValidationError> {
        Ok(Validator::new(input)
            .is_string("username must be a string")?
            .clean_string("username must be a string")?
            .min(3, "username must be at least 3 characters long")?
            .max(16, "username must be at most 16 characters long")?
            .into_value())
    }

    assert_eq!(username("  ada  "), Ok(Value::from("ada")));
    assert_eq!(
        username("xy"),
        Err(ValidationError::new("username must be at least 3 characters long")),
    );
}

#[rstest]
#[case("abc", 3, true)]
#[case("abc", 4, false)]
#[case("", 0, true)]
#[case("", 1, false)]
fn min_string_boundary(#[case] input: &str, #[case] min: i64, #[case] ok: bool) {
    assert_eq!(Validator::new(input).min(min, "too short").is_ok(), ok);
}

#[rstest]
#[case(13, 13, true)]
#[case(12, 13, false)]
#[case(-1, -1, true)]
fn min_numeric_boundary(#[case] input: i64, #[case] min: i64, #[case] ok: bool) {
    assert_eq!(Validator::new(input).min(min, "too small").is_ok(), ok);
}

#[rstest]
#[case(vec![1, 2, 3], 3, true)]
#[case(vec![1, 2, 3], 2, false)]
fn max_collection_boundary(#[case] input: Vec<i32>, #[case] max: i64, #[case] ok: bool) {
    assert_eq!(Validator::new(input).max(max, "too many").is_ok(), ok);
}

#[test]
fn validate_runs_a_custom_check() {
    let result = Validator::new(7).validate(|v| {
        if v.as_i64().is_some_and(|n| n % 2 == 1) {
            Ok(())
        } else {
            Err(ValidationError::new("must be odd"))
        }
    });
    assert!(result.is_ok());

    let err = Validator::new(8)
        .validate(|v| {
            if v.as_i64().is_some_and(|n| n % 2 == 1) {
                Ok(())
            } else {
                Err(ValidationError::new("must be odd"))
            }
        })
        .unwrap_err();
    assert_eq!(err.message(), "must be odd");
}

#[test]
fn layered_validators_share_the_cell_state() {
    let first = Validator::new("  data  ")
        .clean_string("not a string")
        .unwrap();
    // A second validator adopts the first one's cell without copying.
    let second = Validator::from_cell(first.into_cell());
    assert_eq!(second.get(), &Value::from("data"));
}

#[test]
fn date_chain_parses_then_compares() {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid fixture date");

    let result = Validator::new("2024-05-17")
        .is_date("not a date")
        .and_then(|v| v.is_after_date(start, "too early"));
    assert!(result.is_ok());

    let err = Validator::new("2019-05-17")
        .is_date("not a date")
        .and_then(|v| v.is_after_date(start, "too early"))
        .unwrap_err();
    assert_eq!(err.message(), "too early");
}
