//! Transforms: substitute looked-up domain objects mid-chain, then keep
//! validating the substituted value.

use chainval::prelude::*;
use serde_json::json;

fn main() {
    let posts = [
        json!({"title": "Hello World", "status": "published"}),
        json!({"title": "Hello World 2", "status": "draft"}),
        json!({"title": "Hello World 3", "status": "published"}),
    ];
    let post_ids: Vec<Value> = (0..posts.len()).map(|id| Value::from(id as i64)).collect();

    let lookup = move |value: Value| -> Value {
        value
            .as_i64()
            .and_then(|id| posts.get(id as usize))
            .map_or(Value::Null, |post| Value::from_json(post.clone()))
    };

    let input = Value::from_json(json!({
        "pinned_post": 0,
        "likes": [1, 2],
    }));

    let pinned_ids = post_ids.clone();
    let pinned_lookup = lookup.clone();
    let likes_lookup = lookup;

    let result = Validator::new(input).is_array_of_shape(
        Shape::new()
            .field("pinned_post", move |v, _| {
                v.is_int("pinned post ID must be an integer")?
                    .is_one_of(&pinned_ids, "pinned post ID must be a valid post ID")?
                    .transform(pinned_lookup)
                    .validate(|post| {
                        let published = post
                            .as_map()
                            .and_then(|m| m.get("status"))
                            .and_then(Value::as_str)
                            == Some("published");
                        if published {
                            Ok(())
                        } else {
                            Err(ValidationError::new("pinned post must be published"))
                        }
                    })
            })
            .field("likes", move |v, _| {
                v.is_unique("likes must not contain duplicate values")?
                    .is_array_each(
                        {
                            let likes_lookup = likes_lookup.clone();
                            move |like, _| {
                                Ok(like
                                    .is_int("liked post ID must be an integer")?
                                    .is_one_of(&post_ids, "liked post ID must be a valid post ID")?
                                    .transform(likes_lookup.clone()))
                            }
                        },
                        "likes must be a list",
                    )
            }),
        "input must be a map",
    );

    match result {
        Ok(v) => println!(
            "{}",
            serde_json::to_string_pretty(&v.into_value()).unwrap_or_default()
        ),
        Err(e) => println!("invalid: {e}"),
    }
}
