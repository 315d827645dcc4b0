//! Core graph store
//!
//! This module implements the data model:
//! - Vertices with a label and optional properties
//! - Directed edges with a label, two endpoints and optional properties
//! - The [`Graph`] aggregate enforcing id uniqueness and referential integrity
//! - Snapshots for handing the whole graph to an external persistence layer

pub mod edge;
pub mod entity;
pub mod property;
pub mod snapshot;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use entity::{EntityKind, EntityRef, GraphEntity};
pub use property::{PropertyMap, PropertyValue};
pub use snapshot::{GraphSnapshot, SnapshotError, SnapshotResult};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EntityId, Label};
pub use vertex::Vertex;
