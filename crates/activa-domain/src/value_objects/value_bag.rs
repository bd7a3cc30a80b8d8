//! Named value bags consumed by activation

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::value_objects::Value;

/// Ordered sequence of `(key, value)` pairs
///
/// Keys need not be unique. Positional keys are decimal indices (`"0"`,
/// `"1"`, ...). Activation consumes the bag by reference: constructor binding
/// removes what it binds and property population drains the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueBag {
    entries: VecDeque<(String, Value)>,
}

impl ValueBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag of positional values keyed `"0"`, `"1"`, ...
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.into()))
            .collect()
    }

    /// Build a bag from the members of a JSON object, keeping member order
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => {
                Ok(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            serde_json::Value::Null => Ok(Self::new()),
            other => Err(Error::invalid_argument(format!(
                "value bag requires a JSON object, got {other}"
            ))),
        }
    }

    /// Append an entry, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    /// Append an entry
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push_back((key.into(), value.into()));
    }

    /// Remove and return the first entry keyed by `position`
    pub fn take_positional(&mut self, position: usize) -> Option<Value> {
        let key = position.to_string();
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        self.entries.remove(index).map(|(_, v)| v)
    }

    /// Remove and return the first entry whose key equals `name` ignoring case
    pub fn take_named(&mut self, name: &str) -> Option<Value> {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        self.entries.remove(index).map(|(_, v)| v)
    }

    /// Remove and return the first remaining entry
    pub fn pop_front(&mut self) -> Option<(String, Value)> {
        self.entries.pop_front()
    }

    /// First value for `key` (case-insensitive), without removing it
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueBag {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for ValueBag {
    type Item = (String, Value);
    type IntoIter = std::collections::vec_deque::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
