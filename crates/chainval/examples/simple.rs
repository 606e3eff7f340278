//! Basic usage: a flat chain over one string value.

use chainval::prelude::*;

fn main() {
    let input = "hello world";

    let result = Validator::new(input)
        .is_string("input must be a string")
        .and_then(|v| v.is_lowercase("input must be lowercase"))
        .and_then(|v| v.min(3, "input must be at least 3 characters long"))
        .and_then(|v| v.max(12, "input must be at most 12 characters long"));

    match result {
        Ok(v) => println!("valid: {}", v.into_value()),
        Err(e) => println!("invalid: {e}"),
    }
}
