//! Property matcher
//!
//! A filter narrows a label scan. The grammar has exactly three shapes,
//! mirrored by the JSON form a host may deserialize:
//!
//! | Rust                         | JSON                              |
//! |------------------------------|-----------------------------------|
//! | `Filter::Any`                | `null`                            |
//! | `Filter::Id(id)`             | `"0"`                             |
//! | `Filter::Properties(p)`      | `{"name": {"equals": "John Doe"}}` |
//!
//! All keys of a property filter must match (logical AND). Equality is the
//! structural `PartialEq` of [`PropertyValue`].

use crate::graph::{EntityId, GraphEntity, PropertyValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved filter key that compares against the entity id instead of a property
pub const ID_KEY: &str = "_id";

/// Single-key condition wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Equals(PropertyValue),
}

impl Condition {
    /// Check a stored property value against the condition
    pub fn accepts(&self, value: &PropertyValue) -> bool {
        match self {
            Condition::Equals(target) => value == target,
        }
    }

    fn accepts_id(&self, id: &EntityId) -> bool {
        match self {
            Condition::Equals(PropertyValue::String(target)) => target == id.as_str(),
            Condition::Equals(_) => false,
        }
    }
}

/// Conjunction of per-key conditions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyFilter {
    conditions: IndexMap<String, Condition>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to equal `value`
    ///
    /// A later condition on the same key replaces the earlier one.
    pub fn equals(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.conditions
            .insert(key.into(), Condition::Equals(value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.conditions.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn matches<E: GraphEntity>(&self, entity: &E) -> bool {
        self.conditions.iter().all(|(key, condition)| {
            if key == ID_KEY {
                return condition.accepts_id(entity.id());
            }
            entity
                .get_property(key)
                .is_some_and(|value| condition.accepts(value))
        })
    }
}

/// Filter applied on top of a label match
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    /// Label match alone suffices
    #[default]
    Any,
    /// Match the entity with this id
    Id(EntityId),
    /// Match entities whose properties satisfy every condition
    Properties(PropertyFilter),
}

impl Filter {
    pub fn id(id: impl Into<EntityId>) -> Self {
        Filter::Id(id.into())
    }

    /// Shorthand for a single equality condition
    pub fn property(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Filter::Properties(PropertyFilter::new().equals(key, value))
    }

    pub fn matches<E: GraphEntity>(&self, entity: &E) -> bool {
        matches(self, entity)
    }
}

impl From<PropertyFilter> for Filter {
    fn from(filter: PropertyFilter) -> Self {
        Filter::Properties(filter)
    }
}

impl From<EntityId> for Filter {
    fn from(id: EntityId) -> Self {
        Filter::Id(id)
    }
}

impl From<&EntityId> for Filter {
    fn from(id: &EntityId) -> Self {
        Filter::Id(id.clone())
    }
}

impl From<&str> for Filter {
    fn from(id: &str) -> Self {
        Filter::Id(EntityId::from(id))
    }
}

impl From<Option<Filter>> for Filter {
    fn from(filter: Option<Filter>) -> Self {
        filter.unwrap_or_default()
    }
}

/// Evaluate `filter` against an entity
pub fn matches<E: GraphEntity>(filter: &Filter, entity: &E) -> bool {
    match filter {
        Filter::Any => true,
        Filter::Id(id) => entity.id() == id,
        Filter::Properties(props) => props.matches(entity),
    }
}
