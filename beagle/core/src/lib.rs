//! Turns the property records of a Beagle edge into a table.
//!
//! [`render`] is the entry point: it takes the currently selected edge (if
//! any) and produces an [`EdgeView`], which any [`TableWidget`] can draw.

pub mod config;
pub mod error;
pub mod format;
pub mod render;
pub mod table;
pub mod widget;

pub use config::{RenderOption, RenderOptions};
pub use error::RenderError;
pub use format::{CellFormat, CellFormatter};
pub use render::{render, DtoWidget, EdgeView, PLACEHOLDER};
pub use table::{ColumnSet, EdgeTable, NormalizedRecord, RowLayout, TableRow, OCCURRENCE_HEADER};
pub use widget::{TableSpec, TableWidget};
