use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A leaf datum carried by a query expression: the searched-for value of a
/// leaf predicate, a range bound, or an option value.
///
/// The untagged serde representation maps JSON strings to [`Value::Text`]
/// and JSON numbers to [`Value::Int`] or [`Value::Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Text value, rendered quoted
    Text(String),
    /// Integer value, rendered unquoted
    Int(i64),
    /// Floating-point value, rendered unquoted
    Float(f64),
}

/// Coarse kind of a [`Value`], used for range bound agreement.
///
/// Integer and floating-point values are both [`ValueKind::Number`], so an
/// integer lower bound pairs with a floating-point upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
}

impl Value {
    /// Kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Int(_) | Value::Float(_) => ValueKind::Number,
        }
    }

    /// Render this value as a grammar literal: text single-quoted, numbers
    /// in their natural form.
    ///
    /// No escaping is performed on text; values containing the quote
    /// character must be pre-sanitized by the caller.
    pub fn literal(&self) -> String {
        match self {
            Value::Text(text) => format!("'{text}'"),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    /// The unquoted natural rendering (raw text, plain numbers)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Text => write!(f, "text"),
            ValueKind::Number => write!(f, "number"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = QueryError;

    /// Lift a query value out of a JSON document. Strings and numbers are
    /// accepted; null, booleans, arrays, and objects have no literal form
    /// in the grammar.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(QueryError::UnsupportedJson("number out of range".to_string()))
                }
            }
            serde_json::Value::Null => Err(QueryError::UnsupportedJson("null".to_string())),
            serde_json::Value::Bool(_) => Err(QueryError::UnsupportedJson("boolean".to_string())),
            serde_json::Value::Array(_) => Err(QueryError::UnsupportedJson("array".to_string())),
            serde_json::Value::Object(_) => Err(QueryError::UnsupportedJson("object".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_literal_single_quoted() {
        assert_eq!(Value::from("apple").literal(), "'apple'");
        assert_eq!(Value::from("").literal(), "''");
    }

    #[test]
    fn test_text_literal_no_escaping() {
        // Embedded quotes pass through untouched; sanitizing is the
        // caller's responsibility.
        assert_eq!(Value::from("it's").literal(), "'it's'");
    }

    #[test]
    fn test_numeric_literals_unquoted() {
        assert_eq!(Value::from(42).literal(), "42");
        assert_eq!(Value::from(-3i64).literal(), "-3");
        assert_eq!(Value::from(1.5).literal(), "1.5");
        assert_eq!(Value::from(2.0).literal(), "2");
    }

    #[test]
    fn test_kind_agreement() {
        assert_eq!(Value::from(1).kind(), Value::from(2.5).kind());
        assert_ne!(Value::from("a").kind(), Value::from(1).kind());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::try_from(json!("foo")).unwrap(), Value::from("foo"));
        assert_eq!(Value::try_from(json!(7)).unwrap(), Value::Int(7));
        assert_eq!(Value::try_from(json!(0.25)).unwrap(), Value::Float(0.25));
        assert!(matches!(
            Value::try_from(json!(true)),
            Err(QueryError::UnsupportedJson(_))
        ));
        assert!(matches!(
            Value::try_from(json!(null)),
            Err(QueryError::UnsupportedJson(_))
        ));
        assert!(matches!(
            Value::try_from(json!([1, 2])),
            Err(QueryError::UnsupportedJson(_))
        ));
    }

    #[test]
    fn test_serde_untagged() {
        let v: Value = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(v, Value::from("high"));
        let v: Value = serde_json::from_str("3").unwrap();
        assert_eq!(v, Value::Int(3));
        assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), "\"x\"");
    }
}
