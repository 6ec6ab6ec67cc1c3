//! Raw, order-preserving view of a JSON rule specification.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// A JSON value as written in the specification.
///
/// Unlike `serde_json::Value`, mappings keep every entry in document order,
/// so a repeated key is still visible to validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecValue {
    /// A string element (a token)
    Text(String),
    /// An ordered list of elements (a rule body)
    List(Vec<SpecValue>),
    /// A mapping (a rule); entries in document order
    Mapping(Vec<(String, SpecValue)>),
    /// A number or boolean, kept only for error reporting
    Scalar(String),
    /// `null`
    Null,
}

impl SpecValue {
    /// Short description of the value's shape for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(s) => format!("string {s:?}"),
            Self::List(_) => "list".to_string(),
            Self::Mapping(_) => "mapping".to_string(),
            Self::Scalar(s) => format!("value {s}"),
            Self::Null => "null".to_string(),
        }
    }
}

struct SpecValueVisitor;

impl<'de> Visitor<'de> for SpecValueVisitor {
    type Value = SpecValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rule mapping, a list of elements or a token string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<SpecValue, E> {
        Ok(SpecValue::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SpecValue, E> {
        Ok(SpecValue::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SpecValue, E> {
        Ok(SpecValue::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<SpecValue, E> {
        Ok(SpecValue::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<SpecValue, E> {
        Ok(SpecValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<SpecValue, E> {
        Ok(SpecValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<SpecValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SpecValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(SpecValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SpecValue, A::Error> {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, SpecValue>()? {
            entries.push((key, value));
        }
        Ok(SpecValue::Mapping(entries))
    }
}

impl<'de> Deserialize<'de> for SpecValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SpecValueVisitor)
    }
}
