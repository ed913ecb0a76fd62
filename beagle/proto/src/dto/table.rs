//! Serializable form of a rendered edge panel.
//!
//! Front ends that cannot link the renderer (or that want to cache its
//! output) exchange this shape instead.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EdgeViewDto {
    /// Nothing selected yet
    Placeholder { message: String },

    /// Header row and body rows, every cell already formatted
    Table {
        label: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}
