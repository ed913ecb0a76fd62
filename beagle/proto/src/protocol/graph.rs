use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::edge::Edge;
use crate::types::ProtoError;

/// A node of the graph document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,

    #[serde(default)]
    pub properties: Map<String, JsonValue>,

    #[serde(rename = "_node_type", default)]
    pub node_type: String,

    #[serde(rename = "_display", default)]
    pub display: Option<String>,

    #[serde(rename = "_color", default)]
    pub color: Option<String>,
}

impl Node {
    /// Short human readable name, falling back to the node type.
    pub fn display_name(&self) -> &str {
        match self.display.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.node_type,
        }
    }
}

/// The node-link document served by Beagle's graph API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub directed: bool,

    #[serde(default)]
    pub multigraph: bool,

    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub links: Vec<Edge>,
}

impl Graph {
    pub fn from_json_str(json: &str) -> Result<Self, ProtoError> {
        let graph: Graph = serde_json::from_str(json)?;
        log::debug!(
            "Parsed graph with {} nodes and {} edges",
            graph.nodes.len(),
            graph.links.len()
        );
        Ok(graph)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProtoError> {
        let graph: Graph = serde_json::from_reader(reader)?;
        log::debug!(
            "Read graph with {} nodes and {} edges",
            graph.nodes.len(),
            graph.links.len()
        );
        Ok(graph)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProtoError> {
        let path = path.as_ref();
        log::debug!("Loading graph from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.links
    }

    pub fn edge(&self, id: u64) -> Option<&Edge> {
        self.links.iter().find(|edge| edge.id == id)
    }

    /// Like [`Graph::edge`], but a missing edge is an error.
    pub fn find_edge(&self, id: u64) -> Result<&Edge, ProtoError> {
        self.edge(id).ok_or(ProtoError::EdgeNotFound(id))
    }

    pub fn node(&self, id: i64) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edges_of_type<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.links.iter().filter(move |edge| edge.label == label)
    }
}
