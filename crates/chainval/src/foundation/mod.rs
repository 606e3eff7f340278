//! Leaf types of the validation system.
//!
//! This module contains the building blocks the fluent chain is built on:
//!
//! - **Values**: [`Value`], its [`Kind`] discriminant, the numeric
//!   [`Number`] pair, and [`Key`] positions for collection elements
//! - **Cell**: [`ValueCell`], one mutable value plus its lock state
//! - **Error**: [`ValidationError`], the single error kind raised by
//!   failing rules
//!
//! # Architecture
//!
//! Input data is dynamically typed, so the system is built around a closed
//! sum type with an explicit discriminant: every rule decides what applies
//! by pattern-matching on the current [`Kind`], never by reflection. The
//! cell's lock state is what makes the optional protocol work — a locked
//! cell substitutes its default for every external read while rules
//! short-circuit past it.

pub mod cell;
pub mod error;
pub mod value;

pub use cell::ValueCell;
pub use error::ValidationError;
pub use value::{Key, Kind, Map, Number, Value};
