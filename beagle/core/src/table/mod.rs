mod columns;
mod normalize;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use beagle_proto::prelude::Edge;

use crate::config::RenderOptions;
use crate::widget::TableSpec;

pub use columns::{capitalize, ColumnSet, OCCURRENCE_HEADER};
pub use normalize::{normalize, NormalizedRecord};

/// Column count hint handed to table widgets.
const COLUMN_HINT: usize = 2;

/// How body cells line up with the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowLayout {
    /// One cell per discovered column, in header order. Fields an
    /// occurrence lacks get the missing-field placeholder.
    #[default]
    Aligned,

    /// Cells in each record's own key order without filling gaps. Rows of
    /// heterogeneous edges can drift away from their headers.
    RecordOrder,
}

impl FromStr for RowLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aligned" => Ok(RowLayout::Aligned),
            "record" | "record-order" | "record_order" => Ok(RowLayout::RecordOrder),
            other => Err(format!("unknown row layout `{other}` (expected aligned or record)")),
        }
    }
}

impl Display for RowLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RowLayout::Aligned => f.write_str("aligned"),
            RowLayout::RecordOrder => f.write_str("record"),
        }
    }
}

/// One body row: the 1-based occurrence number, then the formatted cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub occurrence: usize,
    pub cells: Vec<String>,
}

impl TableRow {
    /// All cells including the leading occurrence number.
    pub fn to_cells(&self) -> Vec<String> {
        std::iter::once(self.occurrence.to_string())
            .chain(self.cells.iter().cloned())
            .collect()
    }
}

/// The table derived from one edge. Rebuilt on every render.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    label: String,
    columns: ColumnSet,
    records: Vec<NormalizedRecord>,
    options: RenderOptions,
}

impl EdgeTable {
    pub fn build(edge: &Edge, options: &RenderOptions) -> Self {
        let mut columns = ColumnSet::new();
        let mut records = Vec::with_capacity(edge.len());

        for record in edge.records() {
            for key in record.keys() {
                let column = capitalize(key);
                if columns.insert(&column) {
                    log::debug!("Discovered column `{column}` on edge `{}`", edge.label);
                }
            }
            records.push(normalize(record, options.format));
        }

        Self {
            label: edge.label.clone(),
            columns,
            records,
            options: options.clone(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.headers()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn render_body_row(&self, record: &NormalizedRecord, index: usize) -> TableRow {
        let formatter = self.options.formatter();
        let cells = match self.options.layout {
            RowLayout::RecordOrder => record.values().map(|v| formatter.format(v)).collect(),
            RowLayout::Aligned => self
                .columns
                .iter()
                .map(|column| match record.get(column) {
                    Some(value) => formatter.format(value),
                    None => self.options.missing_placeholder.clone(),
                })
                .collect(),
        };

        TableRow {
            key: format!("row-{index}"),
            occurrence: index + 1,
            cells,
        }
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| self.render_body_row(record, i))
            .collect()
    }

    /// Everything a widget needs to draw this table.
    pub fn spec(&self) -> TableSpec<'_, NormalizedRecord> {
        TableSpec {
            caption: &self.label,
            celled: self.options.celled,
            striped: self.options.striped,
            columns: COLUMN_HINT,
            header_row: self.headers(),
            table_data: &self.records,
            render_body_row: Box::new(move |record: &NormalizedRecord, i: usize| {
                self.render_body_row(record, i)
            }),
        }
    }
}
