use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use beagle_core::{RenderOption, RenderOptions, TableSpec, TableWidget};
use beagle_proto::prelude::{Edge, Graph};

/// Draws the edge panel as a text table.
pub struct TextTable {
    celled: bool,
    striped: bool,
}

impl TextTable {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            celled: options.celled,
            striped: options.striped,
        }
    }

    fn style(&self, table: &mut Table) {
        match (self.celled, self.striped) {
            (true, true) => table.with(Style::modern()),
            (true, false) => table.with(Style::sharp()),
            (false, _) => table.with(Style::psql()),
        };
    }
}

impl TableWidget for TextTable {
    type Output = String;

    fn placeholder(&self, message: &str) -> Self::Output {
        message.to_string()
    }

    fn table<T>(&self, spec: &TableSpec<'_, T>) -> Self::Output {
        let mut builder = Builder::default();
        builder.push_record(spec.header_row.clone());
        for row in spec.body_rows() {
            builder.push_record(row.to_cells());
        }

        let mut table = builder.build();
        self.style(&mut table);
        format!("{}\n{table}", spec.caption)
    }
}

#[derive(Tabled)]
struct EdgeSummary<'a> {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Type")]
    label: &'a str,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Occurrences")]
    occurrences: usize,
}

fn node_name(graph: &Graph, id: i64) -> String {
    match graph.node(id) {
        Some(node) => format!("{} ({id})", node.display_name()),
        None => id.to_string(),
    }
}

/// One line per edge with its endpoints and occurrence count.
pub fn render_edges(graph: &Graph, edges: &[&Edge]) -> String {
    let rows = edges.iter().map(|edge| EdgeSummary {
        id: edge.id,
        label: &edge.label,
        source: node_name(graph, edge.source),
        target: node_name(graph, edge.target),
        occurrences: edge.len(),
    });
    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct OptionRow<'a> {
    #[tabled(rename = "Key")]
    key: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
    #[tabled(rename = "Description")]
    help: &'a str,
}

pub fn render_options(options: &[RenderOption]) -> String {
    let rows = options.iter().map(|option| OptionRow {
        key: option.key,
        value: &option.value,
        help: option.help,
    });
    Table::new(rows).with(Style::sharp()).to_string()
}
