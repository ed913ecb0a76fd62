use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::edge::Edge;
use crate::types::ProtoError;

/// The fields an edge type may record per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSchema {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

/// A field found on an occurrence that its edge type does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// 1-based occurrence number.
    pub occurrence: usize,
    pub field: String,
}

impl Display for SchemaViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "occurrence {}: unknown field `{}`", self.occurrence, self.field)
    }
}

const TIMESTAMP: &[&str] = &["timestamp"];
const TIMESTAMP_VALUE: &[&str] = &["timestamp", "value"];

#[rustfmt::skip]
static KNOWN_EDGES: &[EdgeSchema] = &[
    // files
    EdgeSchema { name: "File Of", fields: &[] },
    EdgeSchema { name: "Copied To", fields: TIMESTAMP },
    EdgeSchema { name: "Wrote", fields: &["contents", "timestamp"] },
    EdgeSchema { name: "Accessed", fields: TIMESTAMP },
    EdgeSchema { name: "Deleted", fields: TIMESTAMP },
    EdgeSchema { name: "Copied", fields: TIMESTAMP },
    EdgeSchema { name: "Loaded", fields: TIMESTAMP },
    // processes
    EdgeSchema { name: "Launched", fields: TIMESTAMP },
    // network
    EdgeSchema { name: "Connected To", fields: &["port", "protocol", "timestamp", "payload"] },
    EdgeSchema { name: "HTTP Request To", fields: &["user_agent", "method", "header", "timestamp"] },
    EdgeSchema { name: "DNS Query For", fields: &["timestamp", "record_type"] },
    EdgeSchema { name: "URI Of", fields: TIMESTAMP },
    EdgeSchema { name: "Resolves To", fields: TIMESTAMP },
    // registry
    EdgeSchema { name: "Changed Value", fields: TIMESTAMP_VALUE },
    EdgeSchema { name: "Created Key", fields: TIMESTAMP_VALUE },
    EdgeSchema { name: "Read Key", fields: TIMESTAMP_VALUE },
    EdgeSchema { name: "Deleted Value", fields: TIMESTAMP_VALUE },
    EdgeSchema { name: "Deleted Key", fields: TIMESTAMP_VALUE },
];

impl EdgeSchema {
    pub fn known() -> &'static [EdgeSchema] {
        KNOWN_EDGES
    }

    pub fn lookup(name: &str) -> Option<&'static EdgeSchema> {
        KNOWN_EDGES.iter().find(|schema| schema.name == name)
    }

    pub fn allows(&self, field: &str) -> bool {
        self.fields.iter().any(|known| *known == field)
    }

    pub fn validate(&self, edge: &Edge) -> Vec<SchemaViolation> {
        edge.records()
            .iter()
            .enumerate()
            .flat_map(|(i, record)| {
                record
                    .keys()
                    .filter(move |key| !self.allows(key))
                    .map(move |key| SchemaViolation {
                        occurrence: i + 1,
                        field: key.to_string(),
                    })
            })
            .collect()
    }

    /// Validates `edge` against the schema registered for its label.
    ///
    /// Edge types without a registered schema are accepted as-is; network
    /// edges for instance are often labelled by protocol instead of type.
    pub fn check(edge: &Edge) -> Result<(), ProtoError> {
        let Some(schema) = Self::lookup(&edge.label) else {
            log::debug!("No schema registered for edge type `{}`", edge.label);
            return Ok(());
        };

        let violations = schema.validate(edge);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ProtoError::Schema {
                label: edge.label.clone(),
                violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::edge::PropertyRecord;

    #[test]
    fn test_lookup() {
        assert_eq!(EdgeSchema::lookup("Wrote").unwrap().fields, &["contents", "timestamp"]);
        assert!(EdgeSchema::lookup("wrote").is_none());
        assert!(EdgeSchema::known().iter().all(|s| !s.name.is_empty()));
    }

    #[test]
    fn test_validate_reports_unknown_fields() {
        let edge = Edge::new("Launched")
            .with_record(PropertyRecord::new().with("timestamp", 1))
            .with_record(PropertyRecord::new().with("timestamp", 2).with("pid", 4));

        let violations = EdgeSchema::lookup("Launched").unwrap().validate(&edge);
        assert_eq!(
            violations,
            vec![SchemaViolation {
                occurrence: 2,
                field: "pid".to_string()
            }]
        );
        assert_eq!(violations[0].to_string(), "occurrence 2: unknown field `pid`");
    }

    #[test]
    fn test_check() {
        let ok = Edge::new("Wrote").with_record(PropertyRecord::new().with("contents", "x"));
        assert!(EdgeSchema::check(&ok).is_ok());

        let bad = Edge::new("File Of").with_record(PropertyRecord::new().with("timestamp", 1));
        match EdgeSchema::check(&bad) {
            Err(ProtoError::Schema { label, violations }) => {
                assert_eq!(label, "File Of");
                assert_eq!(violations.len(), 1);
            }
            other => panic!("expected schema error, got {other:?}"),
        }

        let unknown = Edge::new("TCP").with_record(PropertyRecord::new().with("anything", 1));
        assert!(EdgeSchema::check(&unknown).is_ok());
    }
}
