//! Edge implementation for the attributed multigraph
//!
//! Edges are directed and keyed: several edges may join the same ordered pair
//! of nodes as long as their kinds differ.

use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeKey, EdgeKind, NodeId};
use serde::{Deserialize, Serialize};

/// A directed edge with both endpoints materialized
///
/// Identity is the triple (source id, target id, kind); equality and hashing
/// use nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (edge goes FROM this node)
    pub source: Node,

    /// Target node (edge goes TO this node)
    pub target: Node,

    /// Type of relationship (e.g., "knows", "worksAt")
    pub kind: EdgeKind,

    /// Properties associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(source: Node, target: Node, kind: impl Into<EdgeKind>) -> Self {
        Edge {
            source,
            target,
            kind: kind.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new edge with properties
    pub fn new_with_properties(
        source: Node,
        target: Node,
        kind: impl Into<EdgeKind>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            source,
            target,
            kind: kind.into(),
            properties,
        }
    }

    /// Edge between two ids, endpoints carried as bare nodes
    ///
    /// Only the endpoint ids matter to the store; use this when the caller
    /// has no node records at hand.
    pub fn between(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        kind: impl Into<EdgeKind>,
    ) -> Self {
        Self::new(Node::bare(source), Node::bare(target), kind)
    }

    /// Identity triple of this edge
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            source: self.source.id.clone(),
            target: self.target.id.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if this is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.source.id == self.target.id
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source.id == other.source.id
            && self.target.id == other.target.id
            && self.kind == other.kind
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source.id.hash(state);
        self.target.id.hash(state);
        self.kind.hash(state);
    }
}

/// One step of a breadth-first or depth-first traversal: `target` was
/// discovered from `source`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    pub source: Node,
    pub target: Node,
}
