pub mod edge;
pub mod graph;
pub mod schema;
