//! Vertex implementation
//!
//! A vertex is an entity placed in the graph. It carries an id minted by
//! the graph, a single label and an optional properties payload.

use super::entity::{EntityKind, GraphEntity};
use super::property::PropertyMap;
use super::types::{EntityId, Label};
use serde::{Deserialize, Serialize};

/// A vertex in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: EntityId,

    /// Category used for filtering
    pub label: Label,

    /// Properties associated with this vertex, absent until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(id: EntityId, label: impl Into<Label>, properties: Option<PropertyMap>) -> Self {
        Vertex {
            id,
            label: label.into(),
            properties,
        }
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.as_ref().map_or(0, |p| p.len())
    }
}

impl GraphEntity for Vertex {
    const KIND: EntityKind = EntityKind::Vertex;

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
