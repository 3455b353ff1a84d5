use serde::Serialize;

use crate::query::options::Options;

/// Expression operator keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
    Term,
    Phrase,
    Prefix,
    Range,
    Near,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::And => write!(f, "and"),
            Operator::Or => write!(f, "or"),
            Operator::Not => write!(f, "not"),
            Operator::Term => write!(f, "term"),
            Operator::Phrase => write!(f, "phrase"),
            Operator::Prefix => write!(f, "prefix"),
            Operator::Range => write!(f, "range"),
            Operator::Near => write!(f, "near"),
        }
    }
}

/// A fully-formed textual query expression.
///
/// Expressions are immutable and opaque: once produced, an expression is
/// just a body token for an enclosing combinator. The caller owns the
/// string outright and may embed it into any number of other expressions.
///
/// `Expression` serializes transparently as its string form (the exact
/// bytes a search service consumes). There is deliberately no `Deserialize`:
/// expressions are only produced by the constructors in this crate, never
/// parsed back from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Expression(String);

impl Expression {
    pub(crate) fn new(inner: String) -> Self {
        Expression(inner)
    }

    /// The expression text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the expression, returning the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Expression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Expression {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for Expression {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Compose a parenthesized expression from its parts.
///
/// Exactly one space separates the operator, the optional `field=` token,
/// the serialized options, and the body. The trim between the head and the
/// body is structural: an absent field or empty option set never leaves a
/// double space behind.
pub(crate) fn assemble(
    operator: Operator,
    field: Option<&str>,
    options: Option<&Options>,
    body: &str,
) -> Expression {
    let opts = options.map_or_else(String::new, Options::to_query_fragment);

    let head = match field {
        None => format!("({operator} {opts}"),
        Some(field) => format!("({operator} field={field} {opts}"),
    };

    let expression = format!("{} {body})", head.trim_end());
    tracing::trace!(%expression, "assembled expression");

    Expression::new(expression)
}
