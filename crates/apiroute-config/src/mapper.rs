//! HTTP method to handler-function mapping.
//!
//! The mapper table starts from a fixed set of built-in entries. User entries
//! are overlaid on top (last write wins) and only enabled entries make it into
//! the flattened [`Mapper`] list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in entries, in table order.
pub const BUILTIN_MAPPER: [(&str, &str); 6] = [
    ("default", "use"),
    ("GET", "get"),
    ("PUT", "put"),
    ("POST", "post"),
    ("PATCH", "patch"),
    ("DELETE", "delete"),
];

/// Ordered mapping from method key to handler name (or `false`).
pub type MapperTable = IndexMap<String, MapperValue>;

/// Value of a single mapper table entry.
///
/// Serialized as the handler name, or as `false` when the key is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMapperValue", into = "RawMapperValue")]
pub enum MapperValue {
    Handler(String),
    Disabled,
}

impl MapperValue {
    /// Handler name when the entry is enabled.
    ///
    /// An empty name counts as disabled.
    pub fn handler(&self) -> Option<&str> {
        match self {
            MapperValue::Handler(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.handler().is_some()
    }
}

impl From<&str> for MapperValue {
    fn from(name: &str) -> Self {
        MapperValue::Handler(name.to_string())
    }
}

impl From<String> for MapperValue {
    fn from(name: String) -> Self {
        MapperValue::Handler(name)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMapperValue {
    Name(String),
    Flag(bool),
}

impl TryFrom<RawMapperValue> for MapperValue {
    type Error = String;

    fn try_from(raw: RawMapperValue) -> Result<Self, Self::Error> {
        match raw {
            RawMapperValue::Name(name) => Ok(MapperValue::Handler(name)),
            RawMapperValue::Flag(false) => Ok(MapperValue::Disabled),
            RawMapperValue::Flag(true) => {
                Err("mapper entries must be a handler name or `false`".to_string())
            }
        }
    }
}

impl From<MapperValue> for RawMapperValue {
    fn from(value: MapperValue) -> Self {
        match value {
            MapperValue::Handler(name) => RawMapperValue::Name(name),
            MapperValue::Disabled => RawMapperValue::Flag(false),
        }
    }
}

/// One enabled mapper entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mapper {
    /// Method-like key, or `"default"`.
    pub name: String,
    /// Handler function bound to the key.
    pub method: String,
}

/// The built-in table on its own.
pub fn builtin_mapper() -> MapperTable {
    BUILTIN_MAPPER
        .iter()
        .map(|(name, method)| (name.to_string(), MapperValue::from(*method)))
        .collect()
}

/// Overlay `overrides` on the built-in table.
///
/// Overriding a built-in key keeps its position; new keys are appended in
/// the order given.
pub fn merge_mapper(overrides: &MapperTable) -> MapperTable {
    let mut table = builtin_mapper();
    for (key, value) in overrides {
        table.insert(key.clone(), value.clone());
    }
    table
}

/// Flatten a table to its enabled entries, in table order.
pub fn mapper_list(table: &MapperTable) -> Vec<Mapper> {
    table
        .iter()
        .filter_map(|(name, value)| {
            value.handler().map(|method| Mapper {
                name: name.clone(),
                method: method.to_string(),
            })
        })
        .collect()
}
