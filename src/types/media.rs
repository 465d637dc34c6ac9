// src/types/media.rs
//! The custom media mapping and its JSON-ready form.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Transformed mapping handed to destinations: name → JSON value, in the
/// order the source map was built.
pub type CustomMediaJson = IndexMap<String, Value>;

/// Ordered mapping of custom media names to media-query expressions.
///
/// Insertion order is kept all the way through serialization so generated
/// files diff cleanly between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomMediaMap(IndexMap<String, String>);

impl CustomMediaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, returning the previous expression for that name.
    pub fn insert(&mut self, name: impl Into<String>, query: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), query.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, query: impl Into<String>) -> Self {
        self.insert(name, query);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, query)| (name.as_str(), query.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for CustomMediaMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, query)| (name.into(), query.into()))
                .collect(),
        )
    }
}

impl Serialize for CustomMediaMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Accepts any JSON scalar as an expression and stringifies it, so a
// hand-written `{"--wide": 1024}` loads the same way it would export.
impl<'de> Deserialize<'de> for CustomMediaMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(name, value)| {
                let query = stringify_value(&value).into_owned();
                (name, query)
            })
            .collect())
    }
}

/// Caller-pluggable conversion from the source map to the representation
/// actually written (the `toJSON` option of a destination).
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&CustomMediaMap) -> CustomMediaJson + Send + Sync>);

impl Transform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&CustomMediaMap) -> CustomMediaJson + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, custom_media: &CustomMediaMap) -> CustomMediaJson {
        (self.0)(custom_media)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(default_transform)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Every name mapped to its expression as a JSON string, order preserved.
pub fn default_transform(custom_media: &CustomMediaMap) -> CustomMediaJson {
    custom_media
        .iter()
        .map(|(name, query)| (name.to_string(), Value::String(query.to_string())))
        .collect()
}

/// Renders a JSON value as text the way a script runtime's string
/// conversion would: strings verbatim, arrays comma-joined, objects opaque.
pub fn stringify_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(stringify_number(n)),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => stringify_value(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Integral floats print without a fractional part (`400.0` → `400`).
fn stringify_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

/// Rewrites integral floats as integers, recursively, so serialized JSON
/// reads `400` rather than `400.0`. Floats outside the `i64` range are kept.
pub fn integral_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f)
                if n.is_f64()
                    && f.is_finite()
                    && f.fract() == 0.0
                    && f.abs() < i64::MAX as f64 =>
            {
                Value::Number(Number::from(f as i64))
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_numbers).collect()),
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, item)| (key.clone(), integral_numbers(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}
