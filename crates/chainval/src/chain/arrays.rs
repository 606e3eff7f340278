//! Recursive collection validation.
//!
//! Collections validate by recursion: for each element (or each schema
//! field) a fresh child [`Validator`] wraps that element, the caller's
//! callback chains rules on it, and the child's resulting value is collected
//! into a rebuilt composite that replaces the parent's value. Children own
//! their cells — nothing is shared with the parent or with each other.
//!
//! Failure is fail-fast with no partial commit: the first raising callback
//! aborts the whole call before later elements run, and the parent cell is
//! only overwritten once every element has validated.

use std::borrow::Cow;
use std::fmt;

use crate::chain::{ChainResult, Validator};
use crate::foundation::{Key, Map, ValidationError, Value};

type FieldRule = Box<dyn FnOnce(Validator, &Key) -> ChainResult>;

// ============================================================================
// SHAPE
// ============================================================================

/// An ordered mapping from expected field names to per-field validation
/// callbacks, used by [`Validator::is_array_of_shape`] to allow-list and
/// reshape keyed input.
///
/// Fields are evaluated in the order they were added. Input keys that no
/// field names are dropped from the result; named fields missing from the
/// input validate as `Null` (chain `optional` in the callback to accept
/// that).
///
/// ```
/// use chainval::prelude::*;
///
/// let shape = Shape::new()
///     .field("name", |v, _| v.is_string("name must be a string")?.min(1, "name is required"))
///     .field("age", |v, _| v.is_int("age must be an integer")?.min(13, "too young"));
/// ```
#[derive(Default)]
pub struct Shape {
    fields: Vec<(Cow<'static, str>, FieldRule)>,
}

impl Shape {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field with its validation callback. The callback receives a
    /// child validator over the field's value and the field's [`Key`].
    #[must_use = "builder methods must be chained or built"]
    pub fn field(
        mut self,
        name: impl Into<Cow<'static, str>>,
        rule: impl FnOnce(Validator, &Key) -> ChainResult + 'static,
    ) -> Self {
        self.fields.push((name.into(), Box::new(rule)));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|(name, _)| name.as_ref()).collect();
        f.debug_struct("Shape").field("fields", &names).finish()
    }
}

// ============================================================================
// ARRAY RULES
// ============================================================================

impl Validator {
    /// Checks that the value is a collection (list or map).
    pub fn is_array(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_array_like() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the value is a collection and validates every element
    /// through `each`, replacing the collection with the rebuilt result.
    ///
    /// Elements are visited in order (index order for lists, insertion order
    /// for maps). The first failing element aborts the call: later elements
    /// are never visited and the parent value stays untouched.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// # fn main() -> Result<(), ValidationError> {
    /// let value = Validator::new(vec![25, 12, 93])
    ///     .is_array_each(
    ///         |v, _| v.is_int("element must be an integer"),
    ///         "input must be a list",
    ///     )?
    ///     .into_value();
    /// assert_eq!(value, Value::from(vec![25, 12, 93]));
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_array_each(
        self,
        mut each: impl FnMut(Validator, &Key) -> ChainResult,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        self.rule(|cell| {
            let rebuilt = match cell.get().clone() {
                Value::List(items) => {
                    let mut rebuilt = Vec::with_capacity(items.len());
                    for (index, element) in items.into_iter().enumerate() {
                        let key = Key::Index(index);
                        let child = each(Validator::new(element), &key)?;
                        rebuilt.push(child.into_value());
                    }
                    Value::List(rebuilt)
                }
                Value::Map(entries) => {
                    let mut rebuilt = Map::with_capacity(entries.len());
                    for (name, element) in entries {
                        let key = Key::Name(name.clone());
                        let child = each(Validator::new(element), &key)?;
                        rebuilt.insert(name, child.into_value());
                    }
                    Value::Map(rebuilt)
                }
                _ => return Err(fail.into()),
            };
            cell.set(rebuilt);
            Ok(())
        })
    }

    /// Checks that the value is a collection and validates it against a
    /// [`Shape`], replacing it with the reshaped result.
    ///
    /// The output is exactly the shape's field set: each named field is
    /// looked up in the input (missing fields validate as `Null`), validated
    /// through its callback, and collected under its name; input keys the
    /// shape does not name are dropped. Fields evaluate in shape order and
    /// the first failure aborts the call with the parent value untouched.
    ///
    /// ```
    /// use chainval::prelude::*;
    /// use serde_json::json;
    ///
    /// # fn main() -> Result<(), ValidationError> {
    /// let value = Validator::new(Value::from_json(json!({"a": 1, "b": 2})))
    ///     .is_array_of_shape(
    ///         Shape::new().field("a", |v, _| v.is_int("a must be an integer")),
    ///         "input must be a map",
    ///     )?
    ///     .into_value();
    /// assert_eq!(value, Value::from_json(json!({"a": 1})));
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_array_of_shape(
        self,
        shape: Shape,
        fail: impl Into<ValidationError>,
    ) -> ChainResult {
        self.rule(|cell| {
            let entries = match cell.get() {
                Value::Map(entries) => entries.clone(),
                // A list has no named keys; every field validates as Null.
                Value::List(_) => Map::new(),
                _ => return Err(fail.into()),
            };
            let mut rebuilt = Map::with_capacity(shape.fields.len());
            for (name, field_rule) in shape.fields {
                let element = entries.get(name.as_ref()).cloned().unwrap_or(Value::Null);
                let key = Key::Name(name.clone().into_owned());
                let child = field_rule(Validator::new(element), &key)?;
                rebuilt.insert(name.into_owned(), child.into_value());
            }
            cell.set(Value::Map(rebuilt));
            Ok(())
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_array_accepts_both_collection_flavors() {
        assert!(Validator::new(vec![1, 2]).is_array("fail").is_ok());
        assert!(
            Validator::new(Value::from_json(json!({"a": 1})))
                .is_array("fail")
                .is_ok()
        );
        assert!(Validator::new("nope").is_array("fail").is_err());
    }

    #[test]
    fn each_rebuilds_the_list_from_child_results() {
        let value = Validator::new(vec!["a", "b"])
            .is_array_each(
                |v, _| Ok(v.transform(|e| match e {
                    Value::String(s) => Value::String(s.to_uppercase()),
                    other => other,
                })),
                "fail",
            )
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value, Value::from(vec!["A", "B"]));
    }

    #[test]
    fn each_hands_out_index_keys_in_order() {
        let mut keys = Vec::new();
        let result = Validator::new(vec![10, 20, 30]).is_array_each(
            |v, key| {
                keys.push(key.clone());
                Ok(v)
            },
            "fail",
        );
        assert!(result.is_ok());
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
    }

    #[test]
    fn each_hands_out_name_keys_for_maps() {
        let mut keys = Vec::new();
        let input = Value::from_json(json!({"b": 1, "a": 2}));
        let result = Validator::new(input).is_array_each(
            |v, key| {
                keys.push(key.clone());
                Ok(v)
            },
            "fail",
        );
        assert!(result.is_ok());
        assert_eq!(keys, vec![Key::Name("b".into()), Key::Name("a".into())]);
    }

    #[test]
    fn each_aborts_on_the_first_failing_element() {
        let mut visited = 0;
        let err = Validator::new(vec![1, -2, 3])
            .is_array_each(
                |v, _| {
                    visited += 1;
                    v.is_greater_than(0, "element must be positive")
                },
                "fail",
            )
            .unwrap_err();
        assert_eq!(err.message(), "element must be positive");
        // The element after the failing one was never visited.
        assert_eq!(visited, 2);
    }

    #[test]
    fn each_requires_a_collection() {
        let err = Validator::new(42)
            .is_array_each(|v, _| Ok(v), "input must be a list")
            .unwrap_err();
        assert_eq!(err.message(), "input must be a list");
    }

    #[test]
    fn shape_drops_unknown_keys() {
        let value = Validator::new(Value::from_json(json!({"a": 1, "b": 2})))
            .is_array_of_shape(Shape::new().field("a", |v, _| Ok(v)), "fail")
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value, Value::from_json(json!({"a": 1})));
    }

    #[test]
    fn shape_output_follows_field_order() {
        let value = Validator::new(Value::from_json(json!({"b": 2, "a": 1})))
            .is_array_of_shape(
                Shape::new().field("a", |v, _| Ok(v)).field("b", |v, _| Ok(v)),
                "fail",
            )
            .map(Validator::into_value)
            .unwrap();
        let keys: Vec<&String> = value.as_map().map(|m| m.keys().collect()).unwrap_or_default();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn shape_missing_fields_validate_as_null() {
        let value = Validator::new(Value::from_json(json!({})))
            .is_array_of_shape(
                Shape::new().field("nick", |v, _| Ok(v.optional_or("anonymous"))),
                "fail",
            )
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value, Value::from_json(json!({"nick": "anonymous"})));
    }

    #[test]
    fn shape_requires_a_collection() {
        assert!(
            Validator::new("scalar")
                .is_array_of_shape(Shape::new(), "not a map")
                .is_err()
        );
    }

    #[test]
    fn empty_shape_reshapes_to_an_empty_map() {
        let value = Validator::new(Value::from_json(json!({"a": 1})))
            .is_array_of_shape(Shape::new(), "fail")
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value, Value::from_json(json!({})));
    }

    #[test]
    fn locked_chain_skips_recursion() {
        let value = Validator::new(Value::Null)
            .optional()
            .is_array_each(|_, _| unreachable!("locked chain must not recurse"), "fail")
            .map(Validator::into_value)
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn shape_debug_lists_field_names() {
        let shape = Shape::new().field("a", |v, _| Ok(v)).field("b", |v, _| Ok(v));
        assert_eq!(format!("{shape:?}"), r#"Shape { fields: ["a", "b"] }"#);
        assert_eq!(shape.len(), 2);
        assert!(!shape.is_empty());
    }
}
