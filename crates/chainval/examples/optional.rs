//! Optional fields: absent values lock the chain and resolve to a default.

use chainval::prelude::*;
use serde_json::json;

fn main() {
    let input = Value::from_json(json!({
        "gender": "",
        "name": "Linus",
        "public": false,
        "username": "EinLinuus",
    }));

    let public = input
        .as_map()
        .and_then(|m| m.get("public"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let result = Validator::new(input).is_array_of_shape(
        Shape::new()
            .field("name", |v, _| {
                v.is_string(ValidationError::new("name must be a string").with_data("name"))?
                    .clean_string("name must be a string")?
                    .min(
                        3,
                        ValidationError::new("name must be at least 3 characters long")
                            .with_data("name"),
                    )
            })
            .field("gender", |v, _| {
                // An empty gender resolves to "unspecified" instead of failing.
                let allowed = [
                    Value::from("unspecified"),
                    Value::from("male"),
                    Value::from("female"),
                ];
                v.optional_or("unspecified").is_one_of(
                    &allowed,
                    ValidationError::new("please enter a valid gender").with_data("gender"),
                )
            })
            .field("public", |v, _| {
                v.is_bool(ValidationError::new("public must be a boolean").with_data("public"))
            })
            .field("username", move |v, _| {
                // Private profiles do not need a username at all.
                v.optional_if(!public)
                    .is_string(ValidationError::new("username must be a string").with_data("username"))?
                    .min(
                        3,
                        ValidationError::new("username must be at least 3 characters long")
                            .with_data("username"),
                    )?
                    .max(
                        16,
                        ValidationError::new("username must be at most 16 characters long")
                            .with_data("username"),
                    )
            }),
        "input must be a map",
    );

    match result {
        Ok(v) => println!(
            "{}",
            serde_json::to_string_pretty(&v.into_value()).unwrap_or_default()
        ),
        Err(e) => println!(
            "invalid field {}: {}",
            e.data().map(ToString::to_string).unwrap_or_default(),
            e.message()
        ),
    }
}
