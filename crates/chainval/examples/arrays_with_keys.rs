//! Shape validation: allow-listing keys, nested shapes, per-field errors.

use std::process::exit;
use std::sync::LazyLock;

use chainval::prelude::*;
use regex::Regex;
use serde_json::json;

static USERNAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]{3,16}$").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9,16}$").unwrap());

fn main() {
    let input = Value::from_json(json!({
        "username": "EinLinuus",
        "name": "Linus",
        "age": 19,
        "hobbies": ["programming", "gaming"],
        "contact": {
            "email": "linus@example.com",
            "phone": "123456789",
        },
    }));

    let taken = [Value::from("admin"), Value::from("moderator")];
    let shape = Shape::new()
        .field("username", move |v, _| {
            v.is_string(ValidationError::new("username must be a string").with_data("username"))?
                .clean_string("username must be a string")?
                .transform(|value| match value {
                    Value::String(s) => Value::String(s.to_lowercase()),
                    other => other,
                })
                .matches(
                    &USERNAME,
                    ValidationError::new(
                        "username must be 3-16 characters long and only contain a-z and 0-9",
                    )
                    .with_data("username"),
                )?
                .is_not_one_of(
                    &taken,
                    ValidationError::new("username already taken").with_data("username"),
                )
        })
        .field("name", |v, _| {
            v.is_string(ValidationError::new("name must be a string").with_data("name"))?
                .clean_string("name must be a string")?
                .min(
                    3,
                    ValidationError::new("name must be at least 3 characters long").with_data("name"),
                )?
                .max(
                    32,
                    ValidationError::new("name must be at most 32 characters long").with_data("name"),
                )
        })
        .field("age", |v, _| {
            v.is_int(ValidationError::new("age must be an integer").with_data("age"))?
                .min(
                    13,
                    ValidationError::new("you must be at least 13 years old").with_data("age"),
                )
        })
        .field("hobbies", |v, _| {
            v.is_array_each(
                |hobby, key| {
                    let path = format!("hobbies.{key}");
                    hobby
                        .is_string(ValidationError::new("hobby must be a string").with_data(path.clone()))?
                        .clean_string("hobby must be a string")?
                        .min(
                            1,
                            ValidationError::new("hobby must be at least 1 character long")
                                .with_data(path.clone()),
                        )?
                        .max(
                            20,
                            ValidationError::new("hobby must be at most 20 characters long")
                                .with_data(path),
                        )
                },
                ValidationError::new("hobbies must be a list").with_data("hobbies"),
            )?
            .max(
                5,
                ValidationError::new("you can only enter 5 hobbies").with_data("hobbies"),
            )
        })
        .field("contact", |v, _| {
            v.is_array_of_shape(
                Shape::new()
                    .field("email", |v, _| {
                        v.is_email(
                            ValidationError::new("email must be a valid email address")
                                .with_data("contact.email"),
                        )
                    })
                    .field("phone", |v, _| {
                        v.is_string(
                            ValidationError::new("phone must be a string")
                                .with_data("contact.phone"),
                        )?
                        .matches(
                            &PHONE,
                            ValidationError::new("phone must be 9-16 digits long")
                                .with_data("contact.phone"),
                        )
                    }),
                ValidationError::new("contact must be a map").with_data("contact"),
            )
        });

    let validated = match Validator::new(input).is_array_of_shape(shape, "input must be a map") {
        Ok(v) => v.into_value(),
        Err(e) => {
            println!(
                "invalid field {}: {}",
                e.data().map(ToString::to_string).unwrap_or_default(),
                e.message()
            );
            exit(1);
        }
    };

    // Notice the lowercase username, courtesy of the transform.
    println!("{}", serde_json::to_string_pretty(&validated).unwrap_or_default());
}
