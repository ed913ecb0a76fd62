use std::fmt::Write;

use beagle_proto::types::{format_number, Value};

use super::CellFormatter;

pub struct TypedFormatter<'a> {
    pub time_format: &'a str,
    pub null_placeholder: &'a str,
}

impl CellFormatter for TypedFormatter<'_> {
    fn format(&self, value: &Value) -> String {
        match value {
            Value::Nil => self.null_placeholder.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(x) => format_number(*x),
            Value::Text(s) => s.clone(),
            Value::DateTime(dt) => {
                let mut out = String::new();
                if write!(out, "{}", dt.format(self.time_format)).is_err() {
                    log::warn!("Bad time format `{}`, using RFC 3339", self.time_format);
                    return dt.to_rfc3339();
                }
                out
            }
            Value::Nested(json) => json.to_string(),
        }
    }
}
