use thiserror::Error;

use crate::protocol::schema::SchemaViolation;

#[derive(Error, Debug)]
pub enum ProtoError {
    #[error("failed to read graph document: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edge {0} not found in graph")]
    EdgeNotFound(u64),

    #[error("edge `{label}` has {} field(s) outside its schema", violations.len())]
    Schema {
        label: String,
        violations: Vec<SchemaViolation>,
    },

    #[error("wrong value type: expected {expected}, found {found}")]
    WrongValueType {
        expected: &'static str,
        found: &'static str,
    },
}
