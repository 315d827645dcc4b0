//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a vertex or an edge
///
/// Ids are minted by the [`Graph`](super::Graph) from its counter and
/// rendered as the decimal string of the counter value (`"0"`, `"1"`, ...).
/// Ids coming from a snapshot may be any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it was minted from a counter
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        EntityId(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

impl From<&EntityId> for EntityId {
    fn from(id: &EntityId) -> Self {
        id.clone()
    }
}

/// Category of a vertex or edge (e.g., "PERSON", "MARRIED")
///
/// Labels are not unique and are compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id() {
        let id = EntityId::from(42u64);
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.as_u64(), Some(42));
        assert_eq!(format!("{}", id), "42");

        let named: EntityId = "PERSON:32".into();
        assert_eq!(named.as_u64(), None);
    }

    #[test]
    fn test_entity_id_serializes_as_string() {
        let id = EntityId::from(7u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");

        let back: EntityId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_label() {
        let label = Label::new("PERSON");
        assert_eq!(label.as_str(), "PERSON");
        assert_eq!(format!("{}", label), "PERSON");

        let label2: Label = "COMPANY".into();
        assert_ne!(label, label2);
    }
}
