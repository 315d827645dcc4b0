//! Edge implementation
//!
//! Edges are directed: they descend from the vertex `from_id` and ascend
//! to the vertex `to_id`. Both endpoints are fixed at creation.

use super::entity::{EntityKind, GraphEntity};
use super::property::PropertyMap;
use super::types::{EntityId, Label};
use serde::{Deserialize, Serialize};

/// A directed edge in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EntityId,

    /// Type of relationship (e.g., "MARRIED", "CHILDOF")
    pub label: Label,

    /// Source vertex (edge goes FROM this vertex)
    pub from_id: EntityId,

    /// Target vertex (edge goes TO this vertex)
    pub to_id: EntityId,

    /// Properties associated with this edge, absent until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(
        id: EntityId,
        label: impl Into<Label>,
        from_id: EntityId,
        to_id: EntityId,
        properties: Option<PropertyMap>,
    ) -> Self {
        Edge {
            id,
            label: label.into(),
            from_id,
            to_id,
            properties,
        }
    }

    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: &EntityId) -> bool {
        &self.from_id == vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: &EntityId) -> bool {
        &self.to_id == vertex
    }

    /// Check if either endpoint is the given vertex
    pub fn touches(&self, vertex: &EntityId) -> bool {
        self.starts_from(vertex) || self.ends_at(vertex)
    }

    pub fn property_count(&self) -> usize {
        self.properties.as_ref().map_or(0, |p| p.len())
    }
}

impl GraphEntity for Edge {
    const KIND: EntityKind = EntityKind::Edge;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &Label {
        &self.label
    }

    fn properties(&self) -> Option<&PropertyMap> {
        self.properties.as_ref()
    }

    fn properties_mut(&mut self) -> &mut Option<PropertyMap> {
        &mut self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    fn edge(id: u64, from: u64, to: u64) -> Edge {
        Edge::new(
            EntityId::from(id),
            "MARRIED",
            EntityId::from(from),
            EntityId::from(to),
            None,
        )
    }

    #[test]
    fn test_edge_direction() {
        let e = edge(5, 10, 20);

        assert!(e.starts_from(&EntityId::from(10u64)));
        assert!(e.ends_at(&EntityId::from(20u64)));
        assert!(!e.starts_from(&EntityId::from(20u64)));
        assert!(!e.ends_at(&EntityId::from(10u64)));
    }

    #[test]
    fn test_edge_touches() {
        let e = edge(5, 10, 20);
        assert!(e.touches(&EntityId::from(10u64)));
        assert!(e.touches(&EntityId::from(20u64)));
        assert!(!e.touches(&EntityId::from(30u64)));
    }

    #[test]
    fn test_edge_properties() {
        let e = Edge::new(
            EntityId::from(2u64),
            "MARRIED",
            EntityId::from(0u64),
            EntityId::from(1u64),
            Some(props! { "year" => 2014i64, "lasting" => true }),
        );

        assert_eq!(e.get_property("year").unwrap().as_integer(), Some(2014));
        assert_eq!(e.get_property("lasting").unwrap().as_boolean(), Some(true));
        assert_eq!(e.property_count(), 2);
    }

    #[test]
    fn test_edge_json_field_names() {
        let json = serde_json::to_string(&edge(2, 0, 1)).unwrap();
        assert_eq!(json, r#"{"id":"2","label":"MARRIED","fromId":"0","toId":"1"}"#);
    }
}
