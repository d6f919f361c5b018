//! Store configuration
//!
//! Loaded from YAML; every field has a default, so an empty document is a
//! valid configuration.
//!
//! ```yaml
//! dangling_edges: reject
//! pagerank:
//!   damping_factor: 0.9
//!   iterations: 50
//! ```

use attrgraph_algorithms::PageRankConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// What `add_edge` does when an endpoint is not in the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingEdgePolicy {
    /// Create bare placeholder nodes for missing endpoints
    #[default]
    AutoCreate,
    /// Refuse the edge and leave the store unchanged
    Reject,
}

/// Graph store configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Handling of edges whose endpoints are missing
    pub dangling_edges: DanglingEdgePolicy,
    /// Parameters of the delegated PageRank computation
    pub pagerank: PageRankConfig,
}

/// Errors from reading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GraphConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn with_dangling_edges(mut self, policy: DanglingEdgePolicy) -> Self {
        self.dangling_edges = policy;
        self
    }

    pub fn with_pagerank(mut self, pagerank: PageRankConfig) -> Self {
        self.pagerank = pagerank;
        self
    }
}
