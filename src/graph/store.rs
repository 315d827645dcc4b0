//! In-memory graph store
//!
//! The [`Graph`] aggregate owns every vertex, every edge and the counter
//! that mints their ids. It enforces:
//! - unique ids within vertices and within edges
//! - no dangling edges: both endpoints exist at creation, and deleting a
//!   vertex cascades to every edge touching it
//! - the counter never decreases, so ids are never recycled
//!
//! Lookups are linear scans over ordered `Vec`s, which keeps iteration order
//! equal to insertion order. Hosts with large graphs should put an
//! id-to-entity index in front of the store.

use super::edge::Edge;
use super::entity::GraphEntity;
use super::property::PropertyMap;
use super::snapshot::GraphSnapshot;
use super::types::{EntityId, Label};
use super::vertex::Vertex;
use crate::config::{CounterPolicy, GraphConfig};
use crate::query::{Filter, Query};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
///
/// Only creation can fail; deletes, updates and queries degrade to no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Entity id {0} already exists")]
    DuplicateId(EntityId),

    #[error("Invalid edge: endpoint vertex does not exist")]
    VertexMissing,
}

impl GraphError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::DuplicateId(_) => "ERR_DUPLICATE_ID",
            GraphError::VertexMissing => "ERR_VERTEX_MISSING",
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
#[derive(Debug, Clone)]
pub struct Graph {
    /// Vertices in insertion order
    vertices: Vec<Vertex>,

    /// Edges in insertion order
    edges: Vec<Edge>,

    /// Next id to hand out, shared by vertices and edges
    counter: u64,

    config: GraphConfig,
}

impl Graph {
    /// Create a new empty graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            vertices: Vec::with_capacity(config.vertex_capacity),
            edges: Vec::with_capacity(config.edge_capacity),
            counter: 0,
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Value the next minted id will carry
    pub fn counter(&self) -> u64 {
        self.counter
    }

    fn next_id(&mut self) -> EntityId {
        let id = EntityId::from(self.counter);
        self.counter = self.counter.saturating_add(1);
        id
    }

    /// Create a vertex and return its id
    ///
    /// Fails with [`GraphError::DuplicateId`] when the counter collides with
    /// an id already present, which only happens after importing a snapshot
    /// whose counter was kept verbatim. The colliding value is consumed.
    pub fn create_vertex(
        &mut self,
        label: impl Into<Label>,
        properties: Option<PropertyMap>,
    ) -> GraphResult<EntityId> {
        let id = self.next_id();
        if self.id_taken(&id) {
            return Err(GraphError::DuplicateId(id));
        }

        let vertex = Vertex::new(id.clone(), label, properties);
        debug!("Created vertex {} ({})", id, vertex.label);
        self.vertices.push(vertex);
        Ok(id)
    }

    /// Create a directed edge between two existing vertices
    ///
    /// Both endpoints are checked before failing, so the error is the same
    /// whichever side is missing. Nothing is minted on failure.
    pub fn create_edge(
        &mut self,
        label: impl Into<Label>,
        from_id: impl Into<EntityId>,
        to_id: impl Into<EntityId>,
        properties: Option<PropertyMap>,
    ) -> GraphResult<EntityId> {
        let from_id = from_id.into();
        let to_id = to_id.into();

        let from_exists = self.has_vertex(&from_id);
        let to_exists = self.has_vertex(&to_id);
        if !(from_exists && to_exists) {
            debug!("Rejected edge {} -> {}: vertex missing", from_id, to_id);
            return Err(GraphError::VertexMissing);
        }

        let id = self.next_id();
        if self.id_taken(&id) {
            return Err(GraphError::DuplicateId(id));
        }

        let edge = Edge::new(id.clone(), label, from_id, to_id, properties);
        debug!("Created edge {} ({}) {} -> {}", id, edge.label, edge.from_id, edge.to_id);
        self.edges.push(edge);
        Ok(id)
    }

    /// Get a vertex by id
    pub fn get_vertex(&self, id: &EntityId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| &v.id == id)
    }

    /// Get an edge by id
    pub fn get_edge(&self, id: &EntityId) -> Option<&Edge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    pub fn has_vertex(&self, id: &EntityId) -> bool {
        self.get_vertex(id).is_some()
    }

    // vertices and edges share one id namespace
    fn id_taken(&self, id: &EntityId) -> bool {
        self.has_vertex(id) || self.has_edge(id)
    }

    pub fn has_edge(&self, id: &EntityId) -> bool {
        self.get_edge(id).is_some()
    }

    /// Delete a vertex and every edge touching it
    ///
    /// Returns the removed vertex, or `None` if it was not present.
    pub fn delete_vertex(&mut self, id: &EntityId) -> Option<Vertex> {
        let idx = self.vertices.iter().position(|v| &v.id == id)?;
        let vertex = self.vertices.remove(idx);

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        debug!(
            "Deleted vertex {} and {} connected edge(s)",
            id,
            before - self.edges.len()
        );

        Some(vertex)
    }

    /// Delete an edge, returning it if it was present
    pub fn delete_edge(&mut self, id: &EntityId) -> Option<Edge> {
        let idx = self.edges.iter().position(|e| &e.id == id)?;
        debug!("Deleted edge {}", id);
        Some(self.edges.remove(idx))
    }

    /// Merge `properties` into a vertex, returning whether it was found
    pub fn update_vertex(&mut self, id: &EntityId, properties: PropertyMap) -> bool {
        merge_into(self.vertices.iter_mut(), id, properties)
    }

    /// Merge `properties` into an edge, returning whether it was found
    pub fn update_edge(&mut self, id: &EntityId, properties: PropertyMap) -> bool {
        merge_into(self.edges.iter_mut(), id, properties)
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get all outgoing edges from a vertex
    pub fn outgoing_edges(&self, id: &EntityId) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.starts_from(id)).collect()
    }

    /// Get all incoming edges to a vertex
    pub fn incoming_edges(&self, id: &EntityId) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.ends_at(id)).collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove all entities, the counter is left untouched
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        debug!("Cleared graph, counter stays at {}", self.counter);
    }

    /// Start an empty query cursor over this graph
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }

    /// Start a query seeded with the matching vertices
    pub fn find_vertices(&self, label: impl Into<Label>, filter: impl Into<Filter>) -> Query<'_> {
        let mut query = self.query();
        query.find_vertices(label, filter);
        query
    }

    /// Start a query seeded with the matching edges
    pub fn find_edges(&self, label: impl Into<Label>, filter: impl Into<Filter>) -> Query<'_> {
        let mut query = self.query();
        query.find_edges(label, filter);
        query
    }

    /// Copy out the whole aggregate
    pub fn to_object(&self) -> GraphSnapshot {
        GraphSnapshot {
            counter: self.counter,
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Consume the graph into its snapshot without cloning
    pub fn into_object(self) -> GraphSnapshot {
        GraphSnapshot {
            counter: self.counter,
            vertices: self.vertices,
            edges: self.edges,
        }
    }

    /// Replace the whole aggregate with `snapshot`
    ///
    /// The snapshot is trusted structurally (dangling edges or duplicate ids
    /// are not detected). Under [`CounterPolicy::Clamp`] a counter that does
    /// not exceed every numeric id is raised to `max + 1`.
    pub fn from_object(&mut self, snapshot: GraphSnapshot) {
        let max_id = snapshot.max_numeric_id();
        let GraphSnapshot {
            mut counter,
            vertices,
            edges,
        } = snapshot;

        if self.config.counter_policy == CounterPolicy::Clamp {
            if let Some(max_id) = max_id {
                if counter <= max_id {
                    warn!(
                        "Snapshot counter {} is stale, raising it to {}",
                        counter,
                        max_id.saturating_add(1)
                    );
                    counter = max_id.saturating_add(1);
                }
            }
        }

        debug!(
            "Imported snapshot: {} vertices, {} edges, counter {}",
            vertices.len(),
            edges.len(),
            counter
        );
        self.vertices = vertices;
        self.edges = edges;
        self.counter = counter;
    }

    /// Build a graph directly from a snapshot
    pub fn from_snapshot(snapshot: GraphSnapshot, config: GraphConfig) -> Self {
        let mut graph = Self::with_config(config);
        graph.from_object(snapshot);
        graph
    }
}

fn merge_into<'a, E: GraphEntity + 'a>(
    mut entities: impl Iterator<Item = &'a mut E>,
    id: &EntityId,
    properties: PropertyMap,
) -> bool {
    match entities.find(|e| e.id() == id) {
        Some(entity) => {
            debug!("Updated {} {} with {} key(s)", E::KIND, id, properties.len());
            entity.merge_properties(properties);
            true
        }
        None => false,
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
