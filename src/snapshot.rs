//! JSON snapshots of a graph store
//!
//! ```json
//! {
//!   "nodes": [{"id": "A", "attributes": {"key": ["Person"], "name": "Alice"}}],
//!   "edges": [{"source": "A", "target": "B", "key": "knows", "properties": {"since": 2020}}]
//! }
//! ```
//!
//! Node labels travel under the reserved `"key"` attribute beside the
//! properties and are split back out on load.

use crate::config::GraphConfig;
use crate::graph::{Edge, EdgeKind, GraphError, GraphStore, Node, NodeData, NodeId, PropertyMap};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors from reading or writing snapshots
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// One node: id plus joined label/property attributes. A record without an
/// id gets a generated one on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    #[serde(default)]
    pub attributes: NodeData,
}

/// One edge: endpoints, kind and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub key: EdgeKind,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// Serializable image of a whole graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SnapshotResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl GraphStore {
    /// Capture every node and edge
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let nodes = self
            .multigraph()
            .nodes()
            .map(|(id, data)| NodeRecord {
                id: Some(id.clone()),
                attributes: data.clone(),
            })
            .collect();
        let edges = self
            .multigraph()
            .edges()
            .map(|e| EdgeRecord {
                source: e.source.clone(),
                target: e.target.clone(),
                key: e.data.kind.clone(),
                properties: e.data.properties.clone(),
            })
            .collect();
        GraphSnapshot { nodes, edges }
    }

    /// Build a store from a snapshot; edges follow the configured
    /// dangling-edge policy
    pub fn from_snapshot(snapshot: GraphSnapshot, config: GraphConfig) -> SnapshotResult<Self> {
        let mut store = GraphStore::with_config(config);
        for record in snapshot.nodes {
            let NodeData { labels, properties } = record.attributes;
            let node = match record.id {
                Some(id) => Node { id, labels, properties },
                None => Node::generated(labels.into_iter().collect(), properties),
            };
            store.add_node(node)?;
        }
        for record in snapshot.edges {
            store.add_edge(Edge::new_with_properties(
                Node::bare(record.source),
                Node::bare(record.target),
                record.key,
                record.properties,
            ))?;
        }
        Ok(store)
    }

    /// Load a JSON snapshot file
    pub fn load_json(path: impl AsRef<Path>, config: GraphConfig) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let store = Self::from_snapshot(GraphSnapshot::load(path)?, config)?;
        info!(
            path = %path.display(),
            nodes = store.node_count(),
            edges = store.edge_count(),
            "loaded graph snapshot"
        );
        Ok(store)
    }

    /// Write a JSON snapshot file
    pub fn save_json(&self, path: impl AsRef<Path>) -> SnapshotResult<()> {
        let path = path.as_ref();
        self.to_snapshot().save(path)?;
        info!(
            path = %path.display(),
            nodes = self.node_count(),
            edges = self.edge_count(),
            "saved graph snapshot"
        );
        Ok(())
    }
}
