//! [`Map`] — the keyed-mapping node, with allocation, JSON round-trip, and
//! copy helpers.
//!
//! A `Map` wraps `HashMap<String, Value>`: keys are unique and re-inserting
//! a key overwrites the previous value, but iteration order is arbitrary.
//! The renderer sorts keys at every level, so two value-equal maps built in
//! different insertion orders always print identically.

use std::collections::{hash_map, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render;
use crate::value::Value;

/// A string-keyed mapping of tree nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map(HashMap<String, Value>);

impl Map {
    /// Allocate an empty map.
    pub fn new() -> Map {
        Map(HashMap::new())
    }

    /// Consume the wrapper and return the underlying `HashMap`.
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }

    /// Insert a key/value pair, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Pretty-print this map with per-value type annotations.
    /// `offset` is the starting indentation depth, typically 0.
    pub fn string_indent(&self, offset: usize) -> String {
        render::render_map(self, true, offset)
    }

    /// Pretty-print this map without type annotations, just `key :value`
    /// entries.
    pub fn string_indent_no_type_info(&self, offset: usize) -> String {
        render::render_map(self, false, offset)
    }

    /// Deep-copy this map by serializing it to JSON and reparsing.
    ///
    /// The round trip intentionally normalizes through the serialization
    /// format: [`Value::Unknown`] nodes come back as strings holding their
    /// debug representation, and a tree containing a non-finite float fails
    /// the copy outright rather than returning a partial result. We don't
    /// know how the map was built, so serialization errors are propagated,
    /// never swallowed.
    pub fn copy(&self) -> Result<Map> {
        let json = self.to_json()?;
        Map::from_json(&json)
    }

    /// Serialize this map to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON object (or any JSON value's object form) into a map.
    pub fn from_json(json: &str) -> Result<Map> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(inner: HashMap<String, Value>) -> Map {
        Map(inner)
    }
}

impl From<Map> for HashMap<String, Value> {
    fn from(map: Map) -> HashMap<String, Value> {
        map.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Map {
        Map(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
