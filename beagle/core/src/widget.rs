//! The seam between table building and table drawing.
//!
//! The table is handed over the way generic UI table widgets take their
//! input: styling flags, a header row, the raw row data, and a callback that
//! turns one datum into a body row.

use crate::table::TableRow;

pub type RowRenderer<'a, T> = Box<dyn Fn(&T, usize) -> TableRow + 'a>;

pub struct TableSpec<'a, T> {
    /// Title shown above the table, usually the edge label.
    pub caption: &'a str,
    pub celled: bool,
    pub striped: bool,
    /// Column count hint; widgets with a fluid layout may ignore it.
    pub columns: usize,
    pub header_row: Vec<String>,
    /// Only iterated, never inspected by widgets.
    pub table_data: &'a [T],
    pub render_body_row: RowRenderer<'a, T>,
}

impl<T> TableSpec<'_, T> {
    pub fn body_rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        self.table_data
            .iter()
            .enumerate()
            .map(|(i, datum)| (self.render_body_row)(datum, i))
    }
}

/// Something that can draw an edge panel.
pub trait TableWidget {
    type Output;

    /// Drawn when no edge is selected.
    fn placeholder(&self, message: &str) -> Self::Output;

    fn table<T>(&self, spec: &TableSpec<'_, T>) -> Self::Output;
}
