use chrono::{DateTime, Utc};

use beagle_proto::prelude::{FromValue, PropertyRecord, Value};

use super::columns::capitalize;
use crate::format::{legacy, CellFormat};

const TIMESTAMP_KEY: &str = "timestamp";

/// A property record with capitalized keys and typed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRecord {
    fields: Vec<(String, Value)>,
}

impl NormalizedRecord {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // Keys that collide after capitalization keep the first position and
    // the last value.
    fn push(&mut self, name: String, value: Value) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }
}

/// Builds the display form of `record` without touching it.
///
/// A lower-case `timestamp` field is read as seconds since the Unix epoch
/// and becomes a UTC date. How lenient that conversion is depends on
/// `format`, see [`CellFormat`].
pub fn normalize(record: &PropertyRecord, format: CellFormat) -> NormalizedRecord {
    let mut normalized = NormalizedRecord::default();
    for (key, json) in record.iter() {
        let value = if key == TIMESTAMP_KEY {
            match format {
                CellFormat::Typed => typed_timestamp(Value::from(json)),
                CellFormat::Legacy => legacy::epoch_seconds_to_date(legacy::to_number(json))
                    .map_or(Value::Nil, Value::DateTime),
            }
        } else {
            Value::from(json)
        };
        normalized.push(capitalize(key), value);
    }
    normalized
}

fn typed_timestamp(value: Value) -> Value {
    if value.is_nil() {
        return value;
    }
    match DateTime::<Utc>::from_value(&value) {
        Ok(dt) => Value::DateTime(dt),
        Err(err) => {
            log::warn!("Leaving timestamp `{value}` as is: {err}");
            value
        }
    }
}
