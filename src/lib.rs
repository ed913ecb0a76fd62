//! Edge property inspector for Beagle graphs.
//!
//! Re-exports the graph document types and the edge table renderer, plus a
//! few one-call helpers for embedding the panel elsewhere.

use anyhow::{Context, Result};

pub use beagle_core::*;
pub use beagle_proto::prelude::*;

/// Renders the panel for `edge_id` of a node-link graph document.
///
/// `None` renders the placeholder and skips parsing the document.
pub fn inspect(graph_json: &str, edge_id: Option<u64>, options: &RenderOptions) -> Result<EdgeView> {
    let Some(id) = edge_id else {
        return Ok(render(None, options));
    };

    let graph = Graph::from_json_str(graph_json).context("failed to parse graph document")?;
    let edge = graph.find_edge(id)?;
    log::debug!("Inspecting edge {id} `{}`", edge.label);
    Ok(render(Some(edge), options))
}

/// Like [`inspect`], returning the panel as JSON.
pub fn inspect_json(graph_json: &str, edge_id: Option<u64>, settings: &[&str]) -> Result<String> {
    let mut options = RenderOptions::default();
    for setting in settings {
        options.apply(setting)?;
    }
    let view = inspect(graph_json, edge_id, &options)?;
    Ok(serde_json::to_string(&view.to_dto())?)
}
