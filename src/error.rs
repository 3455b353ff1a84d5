use thiserror::Error;

use crate::query::{Operator, ValueKind};

/// Validation error raised when a constructor is given insufficient or
/// inconsistent input. Raised synchronously at construction time; there is
/// no retry or recovery path, these signal programmer errors at the call
/// site.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("range requires a non-empty field name")]
    MissingField,

    #[error("range requires at least one bound")]
    MissingBounds,

    #[error("range bounds must be the same kind, got {lower} and {upper}")]
    MismatchedBounds { lower: ValueKind, upper: ValueKind },

    #[error("{0} requires at least one expression")]
    EmptyCombinator(Operator),

    #[error("unsupported JSON value for a query literal: {0}")]
    UnsupportedJson(String),
}

/// Result type alias for query construction
pub type Result<T> = std::result::Result<T, QueryError>;
