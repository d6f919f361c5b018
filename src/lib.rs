//! Attributed multigraph store
//!
//! A directed, keyed multigraph whose nodes carry labels and scalar
//! properties, behind a small facade.
//!
//! # Features
//!
//! - Nodes with multiple labels and properties
//! - Directed edges typed by kind; parallel edges of different kinds
//! - Add, remove and merge operations
//! - Lazy node and edge views, breadth-first and depth-first traversal
//! - Structural analytics delegated to `attrgraph-algorithms`
//! - JSON snapshots and YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use attrgraph::{Edge, GraphAlgorithms, GraphStore, Node};
//!
//! let mut store = GraphStore::new();
//!
//! let mut alice = Node::new("http://ex.org/Alice", "Person");
//! alice.set_property("age", 30i64);
//! store.add_node(alice).unwrap();
//! store.add_node(Node::new("http://ex.org/Bob", "Person")).unwrap();
//!
//! store
//!     .add_edge(Edge::between("http://ex.org/Alice", "http://ex.org/Bob", "knows"))
//!     .unwrap();
//!
//! assert_eq!(store.degree("http://ex.org/Bob").unwrap(), 1);
//! assert_eq!(store.diameter(), -1);
//! assert_eq!(attrgraph::get_name("http://ex.org/Bob").unwrap(), "Bob");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod naming;
pub mod snapshot;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeKey, EdgeKind, GraphError, GraphResult, GraphStore, IntoNodeId, Label,
    MultiDiGraph, Node, NodeId, PropertyMap, PropertyValue, TreeEdge, LABELS_KEY,
};

pub use algo::{AlgorithmError, GraphAlgorithms, PageRankConfig, UNDEFINED_DISTANCE};
pub use config::{ConfigError, DanglingEdgePolicy, GraphConfig};
pub use naming::get_name;
pub use snapshot::{EdgeRecord, GraphSnapshot, NodeRecord, SnapshotError, SnapshotResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
