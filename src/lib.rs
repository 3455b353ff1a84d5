//! # SQX - Structured Query Expression Builder
//!
//! SQX assembles nested boolean and leaf search-query expressions in the
//! structured textual grammar understood by structured-search services
//! (`(term field=x 'value')`, `(and ...)`, `(range field=y [a,b])`)
//! without hand-formatting strings. Every produced expression has balanced
//! parentheses, correctly ordered options, and correctly quoted literals.
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`query`] - Value rendering, option serialization, and expression
//!   assembly (the construction core plus the public constructors)
//! - [`error`] - The validation error type returned by fallible constructors
//!
//! ## Quick Start
//!
//! ```
//! use sqx::{and, near, prefix, Options};
//!
//! let query = and(
//!     &[
//!         near("kast kaalikas", Some("model"), Some(3), None),
//!         prefix("gam", Some("model"), None),
//!     ],
//!     Some(&Options::new().set("boost", 2)),
//! )?;
//!
//! assert_eq!(
//!     query.as_str(),
//!     "(and boost=2 (near field=model distance=3 'kast kaalikas') (prefix field=model 'gam'))",
//! );
//! # Ok::<(), sqx::QueryError>(())
//! ```
//!
//! ## Composition model
//!
//! Expressions nest by embedding: an [`Expression`](query::Expression) is an
//! opaque immutable string, and combinators splice child expressions into
//! their body verbatim. There is no explicit tree; the nesting exists only in
//! call order, so any expression can be embedded into any number of enclosing
//! expressions without copying concerns beyond the string itself.
//!
//! ## Known limitation
//!
//! String literals are single-quoted with no escaping. Values containing the
//! quote character must be pre-sanitized by the caller.

pub mod error;
pub mod query;

pub use error::{QueryError, Result};
pub use query::{Expression, Operator, Options, Value, ValueKind};
pub use query::{and, matchall, near, not, or, phrase, prefix, range, term};
