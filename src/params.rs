use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder values extracted from a matched URL.
///
/// Iteration order is the order the placeholders appear in the template, so
/// a template `/a/<x>/<y>` always yields `x` before `y`. Serializing to JSON
/// preserves that order as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchParams {
    params: IndexMap<String, String>,
}

impl MatchParams {
    /// Creates new empty params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty params with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            params: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, keeping first-insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Gets a value by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Parses a value as a specific type.
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    /// Returns an iterator over name/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of extracted placeholders.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when the match carried no placeholders.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Converts the params into a JSON object, keys in declaration order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
