//! Behaviour shared by vertices and edges

use super::edge::Edge;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EntityId, Label};
use super::vertex::Vertex;
use std::fmt;

/// Kind of a graph entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vertex,
    Edge,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Vertex => write!(f, "vertex"),
            EntityKind::Edge => write!(f, "edge"),
        }
    }
}

/// Common accessors of an entity placed in a graph
///
/// The properties payload is optional: `None` (no map at all) is distinct
/// from an empty map.
pub trait GraphEntity {
    const KIND: EntityKind;

    fn id(&self) -> &EntityId;

    fn label(&self) -> &Label;

    fn properties(&self) -> Option<&PropertyMap>;

    fn properties_mut(&mut self) -> &mut Option<PropertyMap>;

    /// Get a property value
    fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties().and_then(|props| props.get(key))
    }

    /// Check if the entity carries the given label
    fn has_label(&self, label: &Label) -> bool {
        self.label() == label
    }

    /// Merge `updates` into the property map, creating it if absent
    ///
    /// Existing keys are overwritten, keys not mentioned are kept.
    fn merge_properties(&mut self, updates: PropertyMap) {
        let props = self.properties_mut().get_or_insert_with(PropertyMap::new);
        for (key, value) in updates {
            props.insert(key, value);
        }
    }
}

/// Borrowed view of either kind of entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'g> {
    Vertex(&'g Vertex),
    Edge(&'g Edge),
}

impl<'g> EntityRef<'g> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Vertex(_) => EntityKind::Vertex,
            EntityRef::Edge(_) => EntityKind::Edge,
        }
    }

    pub fn id(&self) -> &'g EntityId {
        match self {
            EntityRef::Vertex(v) => &v.id,
            EntityRef::Edge(e) => &e.id,
        }
    }

    pub fn label(&self) -> &'g Label {
        match self {
            EntityRef::Vertex(v) => &v.label,
            EntityRef::Edge(e) => &e.label,
        }
    }

    pub fn properties(&self) -> Option<&'g PropertyMap> {
        match self {
            EntityRef::Vertex(v) => v.properties.as_ref(),
            EntityRef::Edge(e) => e.properties.as_ref(),
        }
    }

    pub fn get_property(&self, key: &str) -> Option<&'g PropertyValue> {
        self.properties().and_then(|props| props.get(key))
    }

    pub fn as_vertex(&self) -> Option<&'g Vertex> {
        match self {
            EntityRef::Vertex(v) => Some(v),
            EntityRef::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&'g Edge> {
        match self {
            EntityRef::Edge(e) => Some(e),
            EntityRef::Vertex(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    #[test]
    fn test_merge_creates_missing_map() {
        let mut vertex = Vertex::new(EntityId::from(0u64), "ANIMAL", None);
        assert!(vertex.properties().is_none());

        vertex.merge_properties(props! { "name" => "Elephant" });
        assert_eq!(vertex.get_property("name").unwrap().as_string(), Some("Elephant"));
    }

    #[test]
    fn test_merge_overwrites_only_mentioned_keys() {
        let mut vertex = Vertex::new(
            EntityId::from(0u64),
            "ANIMAL",
            Some(props! { "name" => "Elephant", "weight" => 4500i64 }),
        );

        vertex.merge_properties(props! { "weight" => 6000i64, "hasFur" => false });

        let props = vertex.properties().unwrap();
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("name").unwrap().as_string(), Some("Elephant"));
        assert_eq!(props.get("weight").unwrap().as_integer(), Some(6000));
        assert_eq!(props.get("hasFur").unwrap().as_boolean(), Some(false));
    }

    #[test]
    fn test_empty_merge_keeps_map_present() {
        let mut edge = Edge::new(
            EntityId::from(2u64),
            "KNOWS",
            EntityId::from(0u64),
            EntityId::from(1u64),
            None,
        );
        edge.merge_properties(PropertyMap::new());
        assert_eq!(edge.properties().map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_entity_ref_accessors() {
        let vertex = Vertex::new(EntityId::from(0u64), "PERSON", Some(props! { "name" => "Jane" }));
        let r = EntityRef::Vertex(&vertex);

        assert_eq!(r.kind(), EntityKind::Vertex);
        assert_eq!(r.id().as_str(), "0");
        assert_eq!(r.label().as_str(), "PERSON");
        assert_eq!(r.get_property("name").unwrap().as_string(), Some("Jane"));
        assert!(r.as_edge().is_none());
        assert_eq!(r.as_vertex(), Some(&vertex));
    }
}
