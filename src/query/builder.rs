//! Public query constructors.
//!
//! Each constructor validates its own arguments, pre-shapes its body token
//! (joining child expressions, merging the `near` distance into the option
//! set), and hands off to the expression assembler. Nesting is by
//! embedding: pass the output of one constructor as input to another.

use crate::error::{QueryError, Result};
use crate::query::expr::{Expression, Operator, assemble};
use crate::query::options::Options;
use crate::query::value::Value;

/// AND together one or more expressions.
///
/// Child order is preserved and nothing is deduplicated. An empty slice is
/// rejected: it has no meaningful grammar form.
///
/// ```
/// use sqx::{and, term, Options};
///
/// let query = and(&[term("foo", Some("bar"), None)], None)?;
/// assert_eq!(query.as_str(), "(and (term field=bar 'foo'))");
/// # Ok::<(), sqx::QueryError>(())
/// ```
pub fn and(expressions: &[Expression], options: Option<&Options>) -> Result<Expression> {
    combine(Operator::And, expressions, options)
}

/// OR together one or more expressions.
///
/// Same contract as [`and`].
pub fn or(expressions: &[Expression], options: Option<&Options>) -> Result<Expression> {
    combine(Operator::Or, expressions, options)
}

/// Invert the truth value of a single expression.
///
/// Negating several expressions at once requires combining them first:
/// `not(&and(...)?, None)`.
///
/// ```
/// use sqx::{not, prefix, Options};
///
/// let query = not(&prefix("gam", Some("model"), None), Some(&Options::new().set("boost", 2)));
/// assert_eq!(query.as_str(), "(not boost=2 (prefix field=model 'gam'))");
/// ```
pub fn not(expression: &Expression, options: Option<&Options>) -> Expression {
    assemble(Operator::Not, None, options, expression.as_str())
}

/// Search for a range of values on a single field. Works on numeric, date,
/// and text fields.
///
/// At least one bound is required. An omitted bound leaves that end of the
/// interval open: `[a,}` has no upper bound, `{,b]` no lower bound. Both
/// bounds, when present, must be of the same kind (text or number).
///
/// ```
/// use sqx::range;
///
/// let query = range("created_at", Some("1972-10-14T14:43:54Z"), Some("1988-10-14T14:43:54Z"), None)?;
/// assert_eq!(
///     query.as_str(),
///     "(range field=created_at ['1972-10-14T14:43:54Z','1988-10-14T14:43:54Z'])",
/// );
///
/// let query = range("price", Some(10), None::<i64>, None)?;
/// assert_eq!(query.as_str(), "(range field=price [10,})");
/// # Ok::<(), sqx::QueryError>(())
/// ```
pub fn range<L, U>(
    field: &str,
    lower_bound: Option<L>,
    upper_bound: Option<U>,
    options: Option<&Options>,
) -> Result<Expression>
where
    L: Into<Value>,
    U: Into<Value>,
{
    if field.trim().is_empty() {
        return Err(QueryError::MissingField);
    }

    let lower = lower_bound.map(Into::into);
    let upper = upper_bound.map(Into::into);

    let interval = match (lower, upper) {
        (None, None) => return Err(QueryError::MissingBounds),
        (None, Some(upper)) => format!("{{,{}]", upper.literal()),
        (Some(lower), None) => format!("[{},}}", lower.literal()),
        (Some(lower), Some(upper)) => {
            if lower.kind() != upper.kind() {
                return Err(QueryError::MismatchedBounds {
                    lower: lower.kind(),
                    upper: upper.kind(),
                });
            }
            format!("[{},{}]", lower.literal(), upper.literal())
        }
    };

    Ok(assemble(Operator::Range, Some(field), options, &interval))
}

/// Search for a sequence of words. Works on all field types.
///
/// With no field, the search covers all text fields; with a field, only
/// that field.
///
/// ```
/// use sqx::{term, Options};
///
/// assert_eq!(
///     term("apple", Some("identifier"), Some(&Options::new().set("boost", 4))).as_str(),
///     "(term field=identifier boost=4 'apple')",
/// );
/// assert_eq!(term("apple", None, None).as_str(), "(term 'apple')");
/// ```
pub fn term(value: impl Into<Value>, field: Option<&str>, options: Option<&Options>) -> Expression {
    leaf(Operator::Term, value.into(), field, options)
}

/// Search for an exact phrase. Works on all field types.
///
/// Same shape as [`term`] with the `phrase` operator.
pub fn phrase(
    value: impl Into<Value>,
    field: Option<&str>,
    options: Option<&Options>,
) -> Expression {
    leaf(Operator::Phrase, value.into(), field, options)
}

/// Search for the first characters of a whole string. Works on text and
/// literal fields (and their array forms); structured-search services
/// reject prefix searches on numeric fields.
///
/// Same shape as [`term`] with the `prefix` operator.
pub fn prefix(
    value: impl Into<Value>,
    field: Option<&str>,
    options: Option<&Options>,
) -> Expression {
    leaf(Operator::Prefix, value.into(), field, options)
}

/// Search for words that must all be present in a field, at most `distance`
/// words apart from one another.
///
/// The distance lands in the option set as the `distance` key, ahead of any
/// caller-supplied options. A `distance` entry in `options` overrides the
/// parameter's value but keeps the first position.
///
/// ```
/// use sqx::near;
///
/// let query = near("let be", Some("model"), Some(1), None);
/// assert_eq!(query.as_str(), "(near field=model distance=1 'let be')");
/// ```
pub fn near(
    value: impl Into<Value>,
    field: Option<&str>,
    distance: Option<u32>,
    options: Option<&Options>,
) -> Expression {
    let mut merged = Options::new();
    if let Some(distance) = distance {
        merged = merged.set("distance", distance);
    }
    if let Some(options) = options {
        for (name, value) in options.iter() {
            merged = merged.set(name, value.clone());
        }
    }

    leaf(Operator::Near, value.into(), field, Some(&merged))
}

/// The literal `matchall`: matches every document, rendered as the bare
/// token with no parentheses, field, or options.
///
/// Useful as a combinator arm, for example `(or (phrase field=model 'kast
/// vaal') matchall)`.
pub fn matchall() -> Expression {
    Expression::new("matchall".to_string())
}

fn combine(
    operator: Operator,
    expressions: &[Expression],
    options: Option<&Options>,
) -> Result<Expression> {
    if expressions.is_empty() {
        return Err(QueryError::EmptyCombinator(operator));
    }

    let body = expressions
        .iter()
        .map(Expression::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(assemble(operator, None, options, &body))
}

fn leaf(
    operator: Operator,
    value: Value,
    field: Option<&str>,
    options: Option<&Options>,
) -> Expression {
    assemble(operator, field, options, &value.literal())
}
