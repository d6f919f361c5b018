//! Attributed multigraph
//!
//! - Nodes with multiple labels and scalar properties
//! - Directed edges keyed by kind, with properties
//! - Parallel edges between the same nodes when their kinds differ
//! - petgraph-backed storage with hash indexes on ids and edge identities

pub mod edge;
pub mod multigraph;
pub mod node;
pub mod projection;
pub mod property;
pub mod store;
pub mod traversal;
pub mod types;

// Re-export main types
pub use edge::{Edge, TreeEdge};
pub use multigraph::{EdgeData, MultiDiGraph, NodeData};
pub use node::{Node, LABELS_KEY};
pub use projection::{DirectedProjection, SimpleProjection};
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeKey, EdgeKind, IntoNodeId, Label, NodeId};
