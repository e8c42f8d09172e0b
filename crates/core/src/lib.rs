//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, entity/value-object markers and the text validation
//! predicates used by the shell before anything reaches the store.

pub mod entity;
pub mod error;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use validation::{is_decimal, is_integer, parse_decimal, parse_integer};
pub use value_object::ValueObject;
