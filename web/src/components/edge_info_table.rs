use dioxus::prelude::*;

use beagle_core::{render, RenderOptions, TableSpec, TableWidget};
use beagle_proto::prelude::Edge;

use crate::components::table_view::TableView;

/// Property table of the selected edge, or a prompt when there is none.
#[component]
pub fn EdgeInfoTable(edge: Option<Edge>, #[props(default)] options: RenderOptions) -> Element {
    let widget = ElementWidget;
    render(edge.as_ref(), &options).show(&widget)
}

struct ElementWidget;

impl TableWidget for ElementWidget {
    type Output = Element;

    fn placeholder(&self, message: &str) -> Self::Output {
        rsx! {
            h3 { class: "text-center text-lg text-gray-500 py-8", "{message}" }
        }
    }

    fn table<T>(&self, spec: &TableSpec<'_, T>) -> Self::Output {
        let caption = spec.caption;
        let data: Vec<Vec<String>> = spec.body_rows().map(|row| row.to_cells()).collect();
        rsx! {
            div { class: "space-y-2",
                div { class: "text-sm font-semibold text-gray-700", "{caption}" }
                TableView {
                    headers: spec.header_row.clone(),
                    data,
                    celled: spec.celled,
                    striped: spec.striped,
                }
            }
        }
    }
}
