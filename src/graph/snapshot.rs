//! In-memory snapshot of a whole graph
//!
//! The snapshot is the sole persistence boundary: a host writes it wherever
//! it likes (file, network, key-value store) and hands it back to
//! [`Graph::from_object`](super::Graph::from_object). Nothing is validated
//! on the way in.

use super::edge::Edge;
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot encoding errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Plain shape of a graph: counter, vertices and edges in store order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Next value the id counter will hand out
    pub counter: u64,

    #[serde(default)]
    pub vertices: Vec<Vertex>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Largest id in the snapshot that parses as a counter value
    pub fn max_numeric_id(&self) -> Option<u64> {
        self.vertices
            .iter()
            .map(|v| &v.id)
            .chain(self.edges.iter().map(|e| &e.id))
            .filter_map(|id| id.as_u64())
            .max()
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
