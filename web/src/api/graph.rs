use super::ApiClient;
use crate::utils::error::Result;
use beagle_proto::prelude::Graph;

/// Graph documents produced by Beagle's backends
impl ApiClient {
    pub async fn get_graph(&self, graph_id: &str) -> Result<Graph> {
        let response = self.get_request(&graph_path(graph_id)).await?;
        Ok(Graph::from_json_str(&response)?)
    }
}

/// Falls back to the latest graph when no id is given.
pub fn graph_path(graph_id: &str) -> String {
    match graph_id.trim() {
        "" => "/api/graph/latest".to_string(),
        id => format!("/api/graph/{id}"),
    }
}

/// Graph id taken from the page fragment, e.g. `#/graph/12` or `#12`.
pub fn graph_id_from_hash(hash: &str) -> String {
    let hash = hash.trim_start_matches('#').trim_matches('/');
    hash.rsplit('/').next().unwrap_or_default().to_string()
}
