use dioxus::prelude::*;

use beagle_core::RenderOptions;
use beagle_proto::prelude::Graph;

use crate::api::graph_id_from_hash;
use crate::components::edge_info_table::EdgeInfoTable;
use crate::components::panel::{Panel, StatusLine, Tone};
use crate::components::table_view::TableView;
use crate::hooks::{use_graph, GraphState};

fn initial_graph_id() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| graph_id_from_hash(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App() -> Element {
    let graph_id = use_signal(initial_graph_id);
    let state = use_graph(graph_id);

    let subtitle = match graph_id.read().as_str() {
        "" => "Latest graph".to_string(),
        id => format!("Graph {id}"),
    };

    let body = match &*state.read() {
        GraphState::Loading => rsx! {
            StatusLine { message: "Loading graph...".to_string() }
        },
        GraphState::Ready(graph) => rsx! {
            GraphEdges { graph: graph.clone() }
        },
        GraphState::Failed(err) => rsx! {
            StatusLine {
                message: err.to_string(),
                tone: Tone::Error,
                title: Some(err.title().to_string()),
            }
        },
    };

    rsx! {
        main {
            class: "max-w-6xl mx-auto p-6 space-y-6",
            div {
                h1 { class: "text-3xl font-bold text-gray-900", "Beagle" }
                p { class: "mt-2 text-gray-600", "{subtitle}" }
            }
            {body}
        }
    }
}

/// Edge list on top, the selected edge's properties below.
#[component]
fn GraphEdges(graph: Graph) -> Element {
    let mut selected = use_signal(|| None::<usize>);
    let mut legacy = use_signal(|| false);

    let options = if *legacy.read() {
        RenderOptions::legacy()
    } else {
        RenderOptions::default()
    };
    let edge = selected.read().and_then(|i| graph.edges().get(i).cloned());

    let headers = ["Id", "Type", "Source", "Target", "Occurrences"]
        .map(String::from)
        .to_vec();
    let data: Vec<Vec<String>> = graph
        .edges()
        .iter()
        .map(|edge| {
            let name = |id: i64| {
                graph
                    .node(id)
                    .map(|node| node.display_name().to_string())
                    .unwrap_or_else(|| id.to_string())
            };
            vec![
                edge.id.to_string(),
                edge.label.clone(),
                name(edge.source),
                name(edge.target),
                edge.len().to_string(),
            ]
        })
        .collect();

    let edge_count = format!("{} total", data.len());
    let panel_title = match &edge {
        Some(edge) => format!("Edge {}", edge.id),
        None => "Edge Properties".to_string(),
    };
    let occurrences = edge.as_ref().map(|edge| format!("{} occurrence(s)", edge.len()));

    rsx! {
        Panel {
            title: "Edges".to_string(),
            badge: Some(edge_count),
            if data.is_empty() {
                StatusLine { message: "This graph has no edges".to_string() }
            } else {
                TableView {
                    headers,
                    data,
                    selected: *selected.read(),
                    on_row_click: move |i: usize| selected.set(Some(i)),
                }
            }
        }

        Panel {
            title: panel_title,
            badge: occurrences,
            controls: Some(rsx! {
                label { class: "flex items-center gap-2 text-sm text-gray-600",
                    input {
                        r#type: "checkbox",
                        checked: *legacy.read(),
                        onchange: move |_| {
                            let current = *legacy.read();
                            legacy.set(!current);
                        },
                    }
                    "Legacy cells"
                }
            }),
            EdgeInfoTable { edge, options }
        }
    }
}
