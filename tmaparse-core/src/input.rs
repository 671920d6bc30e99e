//! Wire input shapes: parameter collections and the tagged top-level input

use crate::error::TransformError;
use core::fmt;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Ordered, string-keyed parameter collection (URL query string shape).
///
/// Keys may repeat; lookups return the first value, as browsers'
/// `URLSearchParams.get` does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (`a=1&b=2`), percent-decoding keys and values.
    ///
    /// A single leading `?` is ignored. `+` decodes to a space.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Append a key/value pair
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a key/value pair, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of pairs, duplicates included
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read a parameter collection out of a JSON value.
    ///
    /// Accepts a query string, or an object. Object values are taken in
    /// their wire encoding: strings as-is, numbers and booleans as text,
    /// nested objects and arrays as compact JSON. A `null` value means the
    /// parameter is absent. Any other top-level value is malformed input.
    pub fn from_value(value: &Value, expected: &str) -> Result<Self, TransformError> {
        match value {
            Value::String(query) => Ok(Self::parse(query)),
            Value::Object(map) => Ok(map
                .iter()
                .filter_map(|(k, v)| match v {
                    Value::Null => None,
                    Value::String(s) => Some((k.clone(), s.clone())),
                    other => Some((k.clone(), other.to_string())),
                })
                .collect()),
            other => Err(TransformError::malformed(
                expected,
                format!("got {}", crate::error::describe(other)),
            )),
        }
    }

    /// Convert into a JSON object of strings. The first value of a repeated
    /// key wins.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (k, v) in &self.pairs {
            if !map.contains_key(k) {
                map.insert(k.clone(), Value::String(v.clone()));
            }
        }
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Renders as an `application/x-www-form-urlencoded` query string
impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl From<&str> for SearchParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

/// Top-level input handed to a parse entry point.
///
/// The caller states which shape it holds; no property probing is done.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A JSON value whose keys use wire-format names
    Object(Value),
    /// A flat parameter collection
    Params(SearchParams),
}

impl Input {
    /// Lower the input into the JSON value the transformers consume
    pub fn into_value(self) -> Value {
        match self {
            Input::Object(value) => value,
            Input::Params(params) => params.to_value(),
        }
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Object(value)
    }
}

impl From<SearchParams> for Input {
    fn from(params: SearchParams) -> Self {
        Input::Params(params)
    }
}

impl From<&str> for Input {
    fn from(query: &str) -> Self {
        Input::Params(SearchParams::parse(query))
    }
}

impl From<String> for Input {
    fn from(query: String) -> Self {
        Input::Params(SearchParams::parse(&query))
    }
}
