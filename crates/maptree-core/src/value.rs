//! Tree node types for the dynamically-shaped key/value trees this crate inspects.
//!
//! [`Value`] is a closed sum type covering everything a generic decoder
//! (XML-to-map, JSON-to-map, or direct construction) can hand us: a null
//! marker, the four scalar kinds, an ordered sequence, a keyed mapping, and
//! an [`Unknown`](Value::Unknown) escape hatch for anything else. The
//! renderer pattern-matches exhaustively over it, so rendering is total and
//! never panics regardless of what a decoder produced.

use std::fmt;
use std::sync::Arc;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::map::Map;

/// One node of a dynamically-typed tree. Integers and floats are separate
/// variants (the type tags in rendered output distinguish them), and
/// [`Map`] keys are unique strings with no inherent iteration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Positional, order-preserving sequence of nodes.
    Seq(Vec<Value>),
    Map(Map),
    /// Anything outside the expected shapes; rendered via its captured
    /// debug representation instead of failing.
    Unknown(Opaque),
}

impl Value {
    /// Wrap an arbitrary debuggable value as an [`Unknown`](Value::Unknown)
    /// node. The value itself is kept behind a shared pointer; only its
    /// `Debug` output ever reaches the rendered string.
    pub fn unknown<T>(value: T) -> Value
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Value::Unknown(Opaque::new(value))
    }

    /// Serialize this node to a JSON string.
    ///
    /// Fails on non-finite floats (JSON has no representation for them) and
    /// never produces partial output. `Unknown` nodes serialize as their
    /// debug representation; see [`Map::copy`](crate::Map::copy).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON string into a tree. Numbers become [`Value::Int`] when
    /// representable as `i64`, otherwise [`Value::Float`]. Duplicate object
    /// keys follow last-one-wins, matching the mapping overwrite invariant.
    pub fn from_json(json: &str) -> Result<Value> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Seq(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Value {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Shared handle to a value outside the expected shape union.
///
/// Stores the original value behind an `Arc` so trees stay cheap to clone
/// and safe to share across threads; equality compares the captured debug
/// representation, which is all the renderer ever looks at.
#[derive(Clone)]
pub struct Opaque(Arc<dyn fmt::Debug + Send + Sync>);

impl Opaque {
    pub fn new<T>(value: T) -> Opaque
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Opaque(Arc::new(value))
    }

    /// Debug representation of the wrapped value.
    pub fn repr(&self) -> String {
        format!("{:?}", self.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Opaque) -> bool {
        self.repr() == other.repr()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(f) => Err(serde::ser::Error::custom(format!(
                "non-finite float {f} is not representable"
            ))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
            // Opaque values normalize to their debug representation; the
            // copy-via-round-trip path relies on this.
            Value::Unknown(opaque) => serializer.serialize_str(&opaque.repr()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a generic tree value")
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_bool<E>(self, b: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(b))
            }

            fn visit_i64<E>(self, i: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(i))
            }

            fn visit_u64<E>(self, u: u64) -> std::result::Result<Value, E> {
                Ok(match i64::try_from(u) {
                    Ok(i) => Value::Int(i),
                    Err(_) => Value::Float(u as f64),
                })
            }

            fn visit_f64<E>(self, f: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(f))
            }

            fn visit_str<E>(self, s: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(s.to_owned()))
            }

            fn visit_string<E>(self, s: String) -> std::result::Result<Value, E> {
                Ok(Value::String(s))
            }

            fn visit_seq<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(item) = access.next_element()? {
                    items.push(item);
                }
                Ok(Value::Seq(items))
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = Map::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.insert(key, value);
                }
                Ok(Value::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
