use chrono::format::{Item, StrftimeItems};

use crate::error::RenderError;
use crate::format::{CellFormat, CellFormatter, LegacyFormatter, TypedFormatter};
use crate::table::RowLayout;

/// ISO-8601 in UTC with milliseconds, the same text browsers produce.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A render option as listed to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOption {
    pub key: &'static str,
    pub value: String,
    pub help: &'static str,
}

/// Settings for building and drawing an edge table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: CellFormat,
    pub layout: RowLayout,
    pub time_format: String,
    pub null_placeholder: String,
    pub missing_placeholder: String,
    pub celled: bool,
    pub striped: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: CellFormat::Typed,
            layout: RowLayout::Aligned,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            null_placeholder: String::new(),
            missing_placeholder: String::new(),
            celled: true,
            striped: true,
        }
    }
}

impl RenderOptions {
    /// Options reproducing the first browser panel: stringify-and-strip
    /// cells in each record's own key order.
    pub fn legacy() -> Self {
        Self {
            format: CellFormat::Legacy,
            layout: RowLayout::RecordOrder,
            ..Default::default()
        }
    }

    pub fn formatter(&self) -> Box<dyn CellFormatter + '_> {
        match self.format {
            CellFormat::Typed => Box::new(TypedFormatter {
                time_format: &self.time_format,
                null_placeholder: &self.null_placeholder,
            }),
            CellFormat::Legacy => Box::new(LegacyFormatter),
        }
    }

    /// Sets `key` to `value` and returns the previous value.
    ///
    /// Keys accept dashes in place of underscores (`time-format`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<String, RenderError> {
        let key = normalize_key(key);
        let old = self.get(&key)?;
        let invalid = |reason: String| RenderError::InvalidOption {
            key: key.clone(),
            value: value.to_string(),
            reason,
        };

        match key.as_str() {
            "format" => self.format = value.parse().map_err(invalid)?,
            "layout" => self.layout = value.parse().map_err(invalid)?,
            "time_format" => {
                if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
                    return Err(invalid("not a valid strftime format".to_string()));
                }
                self.time_format = value.to_string();
            }
            "null_placeholder" => self.null_placeholder = value.to_string(),
            "missing_placeholder" => self.missing_placeholder = value.to_string(),
            "celled" => self.celled = parse_bool(value).map_err(invalid)?,
            "striped" => self.striped = parse_bool(value).map_err(invalid)?,
            _ => return Err(RenderError::UnsupportedOption(key)),
        }

        log::debug!("Render option {key} changed from `{old}` to `{value}`");
        Ok(old)
    }

    pub fn get(&self, key: &str) -> Result<String, RenderError> {
        match normalize_key(key).as_str() {
            "format" => Ok(self.format.to_string()),
            "layout" => Ok(self.layout.to_string()),
            "time_format" => Ok(self.time_format.clone()),
            "null_placeholder" => Ok(self.null_placeholder.clone()),
            "missing_placeholder" => Ok(self.missing_placeholder.clone()),
            "celled" => Ok(self.celled.to_string()),
            "striped" => Ok(self.striped.to_string()),
            other => Err(RenderError::UnsupportedOption(other.to_string())),
        }
    }

    /// Applies a `key=value` setting.
    pub fn apply(&mut self, setting: &str) -> Result<(), RenderError> {
        let (key, value) = setting
            .split_once('=')
            .ok_or_else(|| RenderError::MalformedSetting(setting.to_string()))?;
        self.set(key.trim(), value)?;
        Ok(())
    }

    pub fn options(&self) -> Vec<RenderOption> {
        let entry = |key: &'static str, help: &'static str| RenderOption {
            key,
            value: self.get(key).unwrap_or_default(),
            help,
        };
        vec![
            entry("format", "Cell text: `typed`, or `legacy` for stringify-and-strip"),
            entry("layout", "Row cells: `aligned` to the headers, or in `record` key order"),
            entry("time_format", "strftime format for timestamps in typed cells"),
            entry("null_placeholder", "Text for null values in typed cells"),
            entry("missing_placeholder", "Text for fields an occurrence does not have"),
            entry("celled", "Draw cell borders"),
            entry("striped", "Separate body rows"),
        ]
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('-', "_")
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.format, CellFormat::Typed);
        assert_eq!(options.layout, RowLayout::Aligned);
        assert!(options.celled && options.striped);

        let legacy = RenderOptions::legacy();
        assert_eq!(legacy.format, CellFormat::Legacy);
        assert_eq!(legacy.layout, RowLayout::RecordOrder);
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut options = RenderOptions::default();
        assert_eq!(options.set("format", "legacy").unwrap(), "typed");
        assert_eq!(options.format, CellFormat::Legacy);

        assert_eq!(options.set("time-format", "%Y").unwrap(), DEFAULT_TIME_FORMAT);
        assert_eq!(options.get("time_format").unwrap(), "%Y");
    }

    #[test]
    fn test_set_rejects_unknown_keys_and_bad_values() {
        let mut options = RenderOptions::default();
        assert_eq!(
            options.set("colour", "red"),
            Err(RenderError::UnsupportedOption("colour".to_string()))
        );
        assert!(matches!(
            options.set("layout", "diagonal"),
            Err(RenderError::InvalidOption { key, .. }) if key == "layout"
        ));
        assert!(matches!(
            options.set("striped", "maybe"),
            Err(RenderError::InvalidOption { .. })
        ));
        assert!(matches!(
            options.set("time_format", "%Q"),
            Err(RenderError::InvalidOption { .. })
        ));
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_apply() {
        let mut options = RenderOptions::default();
        options.apply("missing_placeholder=n/a").unwrap();
        options.apply("celled = off").unwrap();
        options.apply("null_placeholder=").unwrap();
        assert_eq!(options.missing_placeholder, "n/a");
        assert!(!options.celled);
        assert_eq!(
            options.apply("striped"),
            Err(RenderError::MalformedSetting("striped".to_string()))
        );
    }

    #[test]
    fn test_options_listing() {
        let options = RenderOptions::default().options();
        let keys: Vec<_> = options.iter().map(|o| o.key).collect();
        assert_eq!(
            keys,
            vec![
                "format",
                "layout",
                "time_format",
                "null_placeholder",
                "missing_placeholder",
                "celled",
                "striped"
            ]
        );
        assert!(options.iter().all(|o| !o.help.is_empty()));
        assert_eq!(options[0].value, "typed");
    }
}
