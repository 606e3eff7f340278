//! Validating every element of a list, plus whole-collection rules.

use chainval::prelude::*;

fn main() {
    let input = vec![25, 12, 93, 27, 29];

    let result = Validator::new(input)
        .is_array_each(
            |v, _| v.is_int("input must be an integer"),
            "input must be a list",
        )
        .and_then(|v| v.is_unique("input must not contain duplicate values"))
        .and_then(|v| v.min(2, "input must have at least 2 elements"))
        .and_then(|v| v.max(5, "input must have at most 5 elements"));

    match result {
        Ok(v) => println!("valid: {}", v.into_value()),
        Err(e) => println!("invalid: {e}"),
    }
}
