use crate::query::value::Value;

/// Ordered key/value modifiers attached to an expression (for example a
/// relevance `boost` or a proximity `distance`).
///
/// Keys serialize in insertion order; callers that need a deterministic
/// option order control it by insertion order. Setting an existing key
/// overwrites its value in place, keeping the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, Value)>,
}

impl Options {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, chaining style.
    ///
    /// ```
    /// use sqx::Options;
    ///
    /// let options = Options::new().set("boost", 2).set("distance", 3);
    /// assert_eq!(options.to_query_fragment(), "boost=2 distance=3");
    /// ```
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Look up an option by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no options are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Serialize to the grammar's option form: `name=value` pairs joined by
    /// one space, text values double-quoted, numeric values unquoted. An
    /// empty set serializes to an empty string.
    pub fn to_query_fragment(&self) -> String {
        let pairs: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| match value {
                Value::Text(text) => format!("{name}=\"{text}\""),
                other => format!("{name}={other}"),
            })
            .collect();

        pairs.join(" ")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Options::new(), |options, (name, value)| {
                options.set(name, value)
            })
    }
}
