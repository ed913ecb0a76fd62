//! Browser-compatible cell text.
//!
//! The first Beagle front end produced cell text with
//! `JSON.stringify(value).slice(1, -1)` and turned timestamps into dates with
//! JavaScript's `Number()` coercion. Exported tables and screenshots from
//! that panel are still compared against this output, so the helpers below
//! follow the browser byte for byte, including its surprises for
//! non-string values.

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value as JsonValue;

use beagle_proto::types::{format_number, Value};

use super::CellFormatter;

/// Largest distance from the epoch a JavaScript `Date` can represent.
const MAX_DATE_MILLIS: f64 = 8.64e15;

pub struct LegacyFormatter;

impl CellFormatter for LegacyFormatter {
    fn format(&self, value: &Value) -> String {
        strip_outer(&stringify(value)).to_string()
    }
}

/// Drops the first and the last character.
///
/// Inputs shorter than two characters come back empty.
pub fn strip_outer(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// `JSON.stringify` of a normalized value. Dates serialize as quoted
/// ISO-8601 strings.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Nil => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => number(*i as f64),
        Value::Float(x) => number(*x),
        Value::Text(s) => quote(s),
        Value::DateTime(dt) => format!("\"{}\"", iso_string(dt)),
        Value::Nested(json) => stringify_json(json),
    }
}

/// `JSON.stringify` of raw document JSON.
pub fn stringify_json(json: &JsonValue) -> String {
    match json {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => number(i as f64),
            None => number(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => quote(s),
        JsonValue::Array(items) => {
            let items: Vec<String> = items.iter().map(stringify_json).collect();
            format!("[{}]", items.join(","))
        }
        JsonValue::Object(map) => {
            let members: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}:{}", quote(k), stringify_json(v)))
                .collect();
            format!("{{{}}}", members.join(","))
        }
    }
}

fn number(x: f64) -> String {
    if x.is_finite() {
        format_number(x)
    } else {
        "null".to_string()
    }
}

fn quote(s: &str) -> String {
    // Same escapes as the browser: quote, backslash, and control characters.
    JsonValue::String(s.to_string()).to_string()
}

/// `Date.prototype.toISOString`.
pub fn iso_string(dt: &DateTime<Utc>) -> String {
    let year = dt.year();
    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else if year < 0 {
        format!("-{:06}", -year)
    } else {
        format!("+{year:06}")
    };
    format!("{year}-{}", dt.format("%m-%dT%H:%M:%S%.3fZ"))
}

/// JavaScript `Number(value)`.
pub fn to_number(json: &JsonValue) -> f64 {
    match json {
        JsonValue::Null => 0.0,
        JsonValue::Bool(b) => f64::from(u8::from(*b)),
        JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        JsonValue::String(s) => string_to_number(s),
        // Arrays go through their string form: [] is "", [5] is "5".
        JsonValue::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => array_element_text(single).map_or(f64::NAN, |s| string_to_number(&s)),
            _ => f64::NAN,
        },
        JsonValue::Object(_) => f64::NAN,
    }
}

fn array_element_text(json: &JsonValue) -> Option<String> {
    match json {
        JsonValue::Null => Some(String::new()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(format_number(n.as_f64().unwrap_or(f64::NAN))),
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Array(items) => items
            .iter()
            .map(array_element_text)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        JsonValue::Object(_) => None,
    }
}

/// JavaScript's WhiteSpace and LineTerminator characters. Narrower than
/// [`char::is_whitespace`], which also matches U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u128::from_str_radix(&s[2..], radix).map_or(f64::NAN, |n| n as f64);
    }

    // Rust also accepts "inf" and "nan", JavaScript does not.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// `new Date(0).setUTCSeconds(seconds)`: fractions truncate toward zero and
/// anything outside the `Date` range is an invalid date.
///
/// chrono stops at year 262142 while `Date` reaches +275760, so timestamps
/// between roughly 8.2e12 and 8.64e12 seconds (and their negatives) are
/// `None` here although a browser still prints a `+2xxxxx-...Z` date.
pub fn epoch_seconds_to_date(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = seconds.trunc() * 1000.0;
    if millis.abs() > MAX_DATE_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cell(value: Value) -> String {
        LegacyFormatter.format(&value)
    }

    #[test]
    fn test_strings_lose_their_quotes() {
        assert_eq!(cell(Value::Text("cmd.exe".into())), "cmd.exe");
        assert_eq!(cell(Value::Text(String::new())), "");
        assert_eq!(cell(Value::Text("say \"hi\"".into())), r#"say \"hi\""#);
        assert_eq!(cell(Value::Text("C:\\Windows".into())), r"C:\\Windows");
        assert_eq!(cell(Value::Text("line\nbreak".into())), r"line\nbreak");
        assert_eq!(cell(Value::Text("héllo ✓".into())), "héllo ✓");
    }

    #[test]
    fn test_numbers_are_mangled() {
        assert_eq!(cell(Value::Int(42)), "");
        assert_eq!(cell(Value::Int(7)), "");
        assert_eq!(cell(Value::Int(123)), "2");
        assert_eq!(cell(Value::Int(-15)), "1");
        assert_eq!(cell(Value::Float(1.0)), "");
        assert_eq!(cell(Value::Float(3.25)), ".2");
        assert_eq!(cell(Value::Float(f64::NAN)), "ul");
    }

    #[test]
    fn test_booleans_and_null_are_mangled() {
        assert_eq!(cell(Value::Bool(true)), "ru");
        assert_eq!(cell(Value::Bool(false)), "als");
        assert_eq!(cell(Value::Nil), "ul");
    }

    #[test]
    fn test_nested_values_lose_brackets() {
        assert_eq!(cell(Value::Nested(json!({"a": 1}))), r#""a":1"#);
        assert_eq!(cell(Value::Nested(json!([1, "x", null]))), r#"1,"x",null"#);
        assert_eq!(cell(Value::Nested(json!([]))), "");
        assert_eq!(cell(Value::Nested(json!({"f": 2.0}))), r#""f":2"#);
    }

    #[test]
    fn test_dates_are_iso_strings() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(cell(Value::DateTime(epoch)), "1970-01-01T00:00:00.000Z");
        assert_eq!(stringify(&Value::DateTime(epoch)), "\"1970-01-01T00:00:00.000Z\"");

        let far = DateTime::from_timestamp(253402300800, 0).unwrap();
        assert_eq!(iso_string(&far), "+010000-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!(false)), 0.0);
        assert_eq!(to_number(&json!(12.5)), 12.5);
        assert_eq!(to_number(&json!(" 42 ")), 42.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!("0x1F")), 31.0);
        assert_eq!(to_number(&json!("1e3")), 1000.0);
        assert_eq!(to_number(&json!("-Infinity")), f64::NEG_INFINITY);
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["7"])), 7.0);
        assert_eq!(to_number(&json!([null])), 0.0);
        assert!(to_number(&json!([true])).is_nan());
        assert!(to_number(&json!([1, 2])).is_nan());
        assert!(to_number(&json!("inf")).is_nan());
        assert!(to_number(&json!("12abc")).is_nan());
        assert!(to_number(&json!({"a": 1})).is_nan());
    }

    #[test]
    fn test_number_coercion_trims_only_js_whitespace() {
        assert_eq!(to_number(&json!("\u{a0}\u{2028}5\u{3000}\u{feff}")), 5.0);
        assert_eq!(to_number(&json!("\t\r\n")), 0.0);
        // NEL is whitespace to Rust but not to JavaScript.
        assert!(to_number(&json!("\u{85}0")).is_nan());
        assert!(to_number(&json!("0\u{85}")).is_nan());
    }

    #[test]
    fn test_epoch_seconds_to_date() {
        assert_eq!(epoch_seconds_to_date(0.0).unwrap().timestamp(), 0);
        assert_eq!(epoch_seconds_to_date(1.9).unwrap().timestamp(), 1);
        assert_eq!(epoch_seconds_to_date(-1.9).unwrap().timestamp(), -1);
        assert!(epoch_seconds_to_date(f64::NAN).is_none());
        assert!(epoch_seconds_to_date(f64::INFINITY).is_none());
        assert!(epoch_seconds_to_date(9e12).is_none());
        // Inside the browser's range but past chrono's last year.
        assert!(epoch_seconds_to_date(8.5e12).is_none());
        assert!(epoch_seconds_to_date(8.2e12).is_some());
    }

    #[test]
    fn test_strip_outer_short_inputs() {
        assert_eq!(strip_outer(""), "");
        assert_eq!(strip_outer("0"), "");
        assert_eq!(strip_outer("12"), "");
        assert_eq!(strip_outer("\"é\""), "é");
    }
}
