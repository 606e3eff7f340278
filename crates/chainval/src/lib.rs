//! # chainval
//!
//! Fluent, chainable validation and transformation for dynamic input data.
//!
//! Wrap an untyped input value in a [`Validator`](chain::Validator), chain
//! rule methods on it, and extract the validated (possibly transformed)
//! value at the end. The first failing rule raises a structured
//! [`ValidationError`](foundation::ValidationError) that unwinds the whole
//! chain.
//!
//! ## Quick Start
//!
//! ```
//! use chainval::prelude::*;
//!
//! fn age(input: impl Into<Value>) -> Result<Value, ValidationError> {
//!     Ok(Validator::new(input)
//!         .is_int("age must be an integer")?
//!         .min(13, "you must be at least 13 years old")?
//!         .into_value())
//! }
//!
//! assert_eq!(age(19), Ok(Value::Int(19)));
//! assert!(age(10).is_err());
//! assert!(age("19").is_err());
//! ```
//!
//! ## Optional fields
//!
//! [`optional`](chain::Validator::optional) locks the chain when the value
//! is absent: every later rule becomes a no-op and the chain resolves to the
//! optional default instead of failing.
//!
//! ```
//! use chainval::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let nick = Validator::new(Value::Null)
//!     .optional()
//!     .is_string("nick must be a string")? // skipped: the chain is locked
//!     .into_value();
//! assert_eq!(nick, Value::Null);
//! # Ok(())
//! # }
//! ```
//!
//! ## Collections
//!
//! Collections validate recursively: [`is_array_each`](chain::Validator::is_array_each)
//! runs a callback over a child validator per element, and
//! [`is_array_of_shape`](chain::Validator::is_array_of_shape) validates keyed
//! input against a [`Shape`](chain::Shape), dropping keys the shape does not
//! name.
//!
//! ```
//! use chainval::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let signup = Validator::new(Value::from_json(json!({
//!     "name": "  Ada  ",
//!     "age": 36,
//!     "extra": "dropped",
//! })))
//! .is_array_of_shape(
//!     Shape::new()
//!         .field("name", |v, _| {
//!             v.is_string("name must be a string")?
//!                 .clean_string("name must be a string")?
//!                 .min(1, "name is required")
//!         })
//!         .field("age", |v, _| {
//!             v.is_int("age must be an integer")?
//!                 .min(13, "you must be at least 13 years old")
//!         }),
//!     "signup data must be a map",
//! )?
//! .into_value();
//!
//! assert_eq!(signup, Value::from_json(json!({"name": "Ada", "age": 36})));
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod foundation;
pub mod prelude;
