//! Cell text for property values.

pub mod legacy;
mod typed;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use beagle_proto::types::Value;

pub use legacy::LegacyFormatter;
pub use typed::TypedFormatter;

pub trait CellFormatter {
    fn format(&self, value: &Value) -> String;
}

/// Which formatter fills the table cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellFormat {
    /// One rule per value type.
    #[default]
    Typed,

    /// Serialize the value to JSON and drop its first and last character,
    /// as the first browser panel did. Only strings survive intact:
    /// `42` becomes an empty cell and `true` becomes `ru`.
    Legacy,
}

impl FromStr for CellFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "typed" => Ok(CellFormat::Typed),
            "legacy" => Ok(CellFormat::Legacy),
            other => Err(format!("unknown cell format `{other}` (expected typed or legacy)")),
        }
    }
}

impl Display for CellFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellFormat::Typed => f.write_str("typed"),
            CellFormat::Legacy => f.write_str("legacy"),
        }
    }
}
