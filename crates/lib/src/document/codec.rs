//! Conversion between [`Value`] and serialized YAML or JSON.
//!
//! Decoding never goes through an intermediate untyped representation: the
//! `Deserialize` impl below maps every serde data model type onto a `Value`
//! variant directly. Integers that fit in `i64` become [`Value::Int`], all
//! other numbers become [`Value::Float`]. YAML tags (`!Secret x`) are
//! dropped and the tagged node decodes as if it were untagged.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{EnumAccess, IgnoredAny, MapAccess, SeqAccess, VariantAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

use super::{Map, Value};
use crate::Result;

/// Decodes a YAML document. An empty input decodes to `null`.
pub fn from_yaml_str(input: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(input)?)
}

/// Decodes YAML from raw bytes
pub fn from_yaml_slice(input: &[u8]) -> Result<Value> {
    Ok(serde_yaml::from_slice(input)?)
}

/// Encodes a value as YAML
pub fn to_yaml_string(value: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Decodes a JSON document
pub fn from_json_str(input: &str) -> Result<Value> {
    Ok(serde_json::from_str(input)?)
}

/// Encodes a value as compact JSON
pub fn to_json_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes a value as indented JSON
pub fn to_json_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    out.serialize_entry(key, item)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML or JSON value")
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

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some((key, item)) = access.next_entry::<MapKey, Value>()? {
            map.insert(key.0, item);
        }
        Ok(Value::Mapping(map))
    }

    fn visit_enum<A>(self, data: A) -> std::result::Result<Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (IgnoredAny, tagged) = data.variant::<IgnoredAny>()?;
        tagged.newtype_variant::<Value>()
    }
}

/// Mapping key that also accepts non-string YAML scalars (`1: x`, `true: y`)
/// by rendering them as text.
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = MapKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar mapping key")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<MapKey, E> {
                Ok(MapKey(v))
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_unit<E>(self) -> std::result::Result<MapKey, E> {
                Ok(MapKey("null".to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::from(n),
            // Non-finite floats have no JSON form
            Value::Float(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Mapping(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, item)| (key, item.into()))
                    .collect(),
            ),
        }
    }
}

/// Decodes a typed value from a document node.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_value(serde_json::Value::from(value))?)
}

/// Encodes a typed value into a document node.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    Ok(Value::from(serde_json::to_value(value)?))
}
