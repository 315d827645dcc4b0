//! Nanograph
//!
//! A minimal embedded graph store: a process-local collection of labeled
//! vertices and directed labeled edges, with CRUD operations and a chainable
//! query cursor for navigating the graph by label and property equality.
//!
//! # Architecture
//!
//! - [`graph`]: the data model and the [`Graph`] aggregate, the single
//!   mutable source of truth. Creation is strict (duplicate ids and dangling
//!   edges are rejected), deletes and updates are permissive no-ops when the
//!   target is absent.
//! - [`query`]: the property matcher and the [`Query`] cursor, which only
//!   ever holds a shared reference to the graph.
//! - [`config`]: preallocation hints and the counter policy applied when a
//!   snapshot is imported.
//!
//! Everything is synchronous and single-threaded. A host sharing a graph
//! across threads wraps it in its own lock.
//!
//! ## Example Usage
//!
//! ```rust
//! use nanograph::{props, Filter, Graph, GraphError};
//!
//! let mut graph = Graph::new();
//!
//! let john = graph.create_vertex("PERSON", Some(props! { "name" => "John Doe" })).unwrap();
//! let jane = graph.create_vertex("PERSON", Some(props! { "name" => "Jane Doe" })).unwrap();
//! let married = graph
//!     .create_edge("MARRIED", &john, &jane, Some(props! { "year" => 2014i64 }))
//!     .unwrap();
//! assert_eq!((john.as_str(), jane.as_str(), married.as_str()), ("0", "1", "2"));
//!
//! // Edges need both endpoints
//! assert_eq!(
//!     graph.create_edge("X", "missing-id", &jane, None),
//!     Err(GraphError::VertexMissing)
//! );
//!
//! let spouses = graph
//!     .find_vertices("PERSON", Filter::property("name", "John Doe"))
//!     .over("MARRIED", Filter::Any)
//!     .to("PERSON", Filter::Any)
//!     .get_all()
//!     .into_vertices();
//! assert_eq!(spouses.len(), 1);
//! assert_eq!(spouses[0].id, jane);
//!
//! // Deleting a vertex removes the edges touching it
//! graph.delete_vertex(&john);
//! assert_eq!(graph.edge_count(), 0);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod query;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, CounterPolicy, GraphConfig};

pub use graph::{
    Edge, EntityId, EntityKind, EntityRef, Graph, GraphEntity, GraphError, GraphResult,
    GraphSnapshot, Label, PropertyMap, PropertyValue, SnapshotError, SnapshotResult, Vertex,
};

pub use query::{Condition, Filter, PropertyFilter, Query, Selection};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
