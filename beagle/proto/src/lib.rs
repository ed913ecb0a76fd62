pub mod dto;
pub mod protocol;
pub mod types;

pub mod prelude {
    // --- Graph Document ---
    pub use crate::protocol::edge::{Edge, EdgeProperties, PropertyRecord};
    pub use crate::protocol::graph::{Graph, Node};
    pub use crate::protocol::schema::{EdgeSchema, SchemaViolation};

    // --- Core Data Types ---
    pub use crate::types::Value;

    // --- Type Conversion ---
    pub use crate::types::FromValue;

    // --- Error Handling ---
    pub use crate::types::ProtoError;

    // --- DTO Structures ---
    pub use crate::dto::table::EdgeViewDto;
}
