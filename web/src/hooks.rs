use dioxus::prelude::*;

use beagle_proto::prelude::Graph;

use crate::api::ApiClient;
use crate::utils::error::AppError;

/// Where the graph request stands.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphState {
    Loading,
    Ready(Graph),
    Failed(AppError),
}

/// Fetches the graph named by `graph_id`, again whenever the id changes.
///
/// A response for an id that is no longer current is dropped.
pub fn use_graph(graph_id: Signal<String>) -> Signal<GraphState> {
    let state = use_signal(|| GraphState::Loading);

    use_effect(move || {
        let id = graph_id.read().clone();
        let mut status = state;
        status.set(GraphState::Loading);
        spawn(async move {
            let result = ApiClient::new().get_graph(&id).await;
            if *graph_id.peek() != id {
                log::debug!("Dropping stale response for graph `{id}`");
                return;
            }
            status.set(match result {
                Ok(graph) => {
                    log::debug!("Graph `{id}` has {} edges", graph.edges().len());
                    GraphState::Ready(graph)
                }
                Err(err) => {
                    log::warn!("Graph `{id}` failed to load: {err}");
                    GraphState::Failed(err)
                }
            });
        });
    });

    state
}
