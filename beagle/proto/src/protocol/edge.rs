use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One recorded occurrence of a relationship.
///
/// Keys keep the order in which they appear in the graph document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyRecord(Map<String, JsonValue>);

impl PropertyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, keeps insertion order.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeProperties {
    #[serde(default)]
    pub data: Vec<PropertyRecord>,
}

/// A link of the graph document.
///
/// Beagle consolidates repeated interactions between two nodes into a single
/// edge, so `properties.data` holds one record per observed occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub source: i64,

    #[serde(default)]
    pub target: i64,

    /// Edge type name, e.g. "Wrote" or "Connected To".
    #[serde(rename = "type", alias = "label", default)]
    pub label: String,

    #[serde(default)]
    pub properties: EdgeProperties,
}

impl Edge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_record(mut self, record: PropertyRecord) -> Self {
        self.properties.data.push(record);
        self
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.properties.data
    }

    /// Number of recorded occurrences.
    pub fn len(&self) -> usize {
        self.properties.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.data.is_empty()
    }

    /// Returns true when every key of `query` matches its value in at least
    /// one occurrence. The occurrences do not have to be the same one.
    pub fn contains(&self, query: &PropertyRecord) -> bool {
        query.iter().all(|(key, value)| {
            self.records()
                .iter()
                .any(|record| record.get(key) == Some(value))
        })
    }
}
