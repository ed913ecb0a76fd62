//! Conversions out of [`Value`].
//!
//! Property records are loosely typed: a timestamp can be an integer in one
//! occurrence and a numeric string in the next. The conversion accepts every
//! representation Beagle datasources are known to emit.

use chrono::{DateTime, Utc};

use crate::types::error::ProtoError;
use crate::types::Value;

/// Trait for converting a [`Value`] to a concrete type.
pub trait FromValue: Sized {
    /// Convert a value to this type
    ///
    /// # Errors
    /// Returns `ProtoError::WrongValueType` if the conversion is not possible
    fn from_value(value: &Value) -> Result<Self, ProtoError>;
}

fn wrong_type(expected: &'static str, value: &Value) -> ProtoError {
    ProtoError::WrongValueType {
        expected,
        found: value.type_name(),
    }
}

/// Numbers are read as whole seconds since the Unix epoch; fractions are
/// truncated toward zero.
impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self, ProtoError> {
        let seconds = match value {
            Value::DateTime(dt) => return Ok(*dt),
            Value::Int(i) => *i,
            Value::Float(x) if x.is_finite() => x.trunc() as i64,
            Value::Text(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(i) => i,
                    Err(_) => match s.parse::<f64>() {
                        Ok(x) if x.is_finite() => x.trunc() as i64,
                        _ => return Err(wrong_type("datetime", value)),
                    },
                }
            }
            _ => return Err(wrong_type("datetime", value)),
        };
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| wrong_type("datetime", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_from_seconds() {
        let dt = DateTime::<Utc>::from_value(&Value::Int(0)).unwrap();
        assert_eq!(dt.timestamp(), 0);

        let dt = DateTime::<Utc>::from_value(&Value::Float(1.9)).unwrap();
        assert_eq!(dt.timestamp(), 1);

        let dt = DateTime::<Utc>::from_value(&Value::Text("1546300800".into())).unwrap();
        assert_eq!(dt.to_rfc3339(), "2019-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_datetime_rejects_garbage() {
        assert!(DateTime::<Utc>::from_value(&Value::Text("yesterday".into())).is_err());
        assert!(DateTime::<Utc>::from_value(&Value::Nil).is_err());
        assert!(DateTime::<Utc>::from_value(&Value::Int(i64::MAX)).is_err());
        assert!(matches!(
            DateTime::<Utc>::from_value(&Value::Bool(true)),
            Err(ProtoError::WrongValueType { found: "bool", .. })
        ));
    }
}
