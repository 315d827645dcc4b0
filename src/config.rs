//! Graph configuration
//!
//! Hosts either build a [`GraphConfig`] in code or parse it from YAML:
//!
//! ```yaml
//! vertex_capacity: 1024
//! edge_capacity: 4096
//! counter_policy: clamp
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How `from_object` treats the counter of an imported snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterPolicy {
    /// Raise a stale counter above every numeric id already present
    #[default]
    Clamp,
    /// Keep the imported counter verbatim
    Trust,
}

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Initial capacity of the vertex collection
    pub vertex_capacity: usize,
    /// Initial capacity of the edge collection
    pub edge_capacity: usize,
    /// Counter handling on snapshot import
    pub counter_policy: CounterPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 64,
            edge_capacity: 128,
            counter_policy: CounterPolicy::Clamp,
        }
    }
}

impl GraphConfig {
    /// Parse a configuration from YAML, missing fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_counter_policy(mut self, policy: CounterPolicy) -> Self {
        self.counter_policy = policy;
        self
    }
}
