use beagle_proto::prelude::{Edge, EdgeViewDto};

use crate::config::RenderOptions;
use crate::table::EdgeTable;
use crate::widget::{TableSpec, TableWidget};

/// Prompt shown while no edge is selected.
pub const PLACEHOLDER: &str = "Click an Edge to view information";

/// What the edge panel shows.
#[derive(Debug, Clone)]
pub enum EdgeView {
    Placeholder,
    Table(EdgeTable),
}

/// Builds the panel for the current selection.
///
/// Pure: `edge` is only read, and nothing is kept between calls.
pub fn render(edge: Option<&Edge>, options: &RenderOptions) -> EdgeView {
    match edge {
        None => EdgeView::Placeholder,
        Some(edge) => {
            log::debug!(
                "Rendering edge {} `{}` with {} occurrence(s)",
                edge.id,
                edge.label,
                edge.len()
            );
            EdgeView::Table(EdgeTable::build(edge, options))
        }
    }
}

impl EdgeView {
    pub fn show<W: TableWidget>(&self, widget: &W) -> W::Output {
        match self {
            EdgeView::Placeholder => widget.placeholder(PLACEHOLDER),
            EdgeView::Table(table) => widget.table(&table.spec()),
        }
    }

    pub fn to_dto(&self) -> EdgeViewDto {
        self.show(&DtoWidget)
    }
}

/// Draws the panel into its serializable form.
pub struct DtoWidget;

impl TableWidget for DtoWidget {
    type Output = EdgeViewDto;

    fn placeholder(&self, message: &str) -> Self::Output {
        EdgeViewDto::Placeholder {
            message: message.to_string(),
        }
    }

    fn table<T>(&self, spec: &TableSpec<'_, T>) -> Self::Output {
        EdgeViewDto::Table {
            label: spec.caption.to_string(),
            headers: spec.header_row.clone(),
            rows: spec.body_rows().map(|row| row.to_cells()).collect(),
        }
    }
}
