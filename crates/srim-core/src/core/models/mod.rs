//! Typed data model for a TRIM run description.
//!
//! The types here are plain, read-only descriptions: the writers in
//! [`crate::core::io`] consume them by field access and never mutate them.
//! Construction is the one place where light physical sanity checks happen;
//! the writers themselves pass every value through verbatim.

pub mod calculation;
pub mod element;
pub mod ion;
pub mod layer;
pub mod settings;
pub mod target;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Value for '{field}' must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Value for '{field}' must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("Unknown element symbol '{0}'")]
    UnknownElement(String),
}
