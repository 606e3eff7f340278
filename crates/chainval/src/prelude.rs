//! Prelude module for convenient imports.
//!
//! Provides a single `use chainval::prelude::*;` import that brings in the
//! chain, the value model, and the error type.
//!
//! ```
//! use chainval::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let value = Validator::new("hello").is_string("not a string")?.into_value();
//! assert_eq!(value.as_str(), Some("hello"));
//! # Ok(())
//! # }
//! ```

pub use crate::chain::{ChainResult, Shape, Validator};
pub use crate::foundation::{Key, Kind, Map, Number, ValidationError, Value, ValueCell};
