//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node, unique within one graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Fresh random identifier for nodes built without one
    pub fn generate() -> Self {
        NodeId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id.to_string())
    }
}

/// Node label, one of a node's type tags (e.g., "Person", "Employee")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

/// Edge kind, the discriminator between parallel edges (e.g., "knows")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKind(String);

impl EdgeKind {
    pub fn new(kind: impl Into<String>) -> Self {
        EdgeKind(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeKind {
    fn from(s: String) -> Self {
        EdgeKind(s)
    }
}

impl From<&str> for EdgeKind {
    fn from(s: &str) -> Self {
        EdgeKind(s.to_string())
    }
}

/// Identity triple of an edge: at most one edge exists per key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl EdgeKey {
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        kind: impl Into<EdgeKind>,
    ) -> Self {
        EdgeKey {
            source: source.into(),
            target: target.into(),
            kind: kind.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-[{}]->({})", self.source, self.kind, self.target)
    }
}

/// Anything that names a node: a bare id or a node record
///
/// Every id-accepting store operation takes `impl IntoNodeId`, so callers can
/// pass `"A"`, a `NodeId` or a fetched `Node` interchangeably.
pub trait IntoNodeId {
    fn into_node_id(self) -> NodeId;
}

impl IntoNodeId for NodeId {
    fn into_node_id(self) -> NodeId {
        self
    }
}

impl IntoNodeId for &NodeId {
    fn into_node_id(self) -> NodeId {
        self.clone()
    }
}

impl IntoNodeId for &str {
    fn into_node_id(self) -> NodeId {
        NodeId::new(self)
    }
}

impl IntoNodeId for String {
    fn into_node_id(self) -> NodeId {
        NodeId(self)
    }
}

impl IntoNodeId for &String {
    fn into_node_id(self) -> NodeId {
        NodeId(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_node_id() {
        let id = NodeId::new("A");
        assert_eq!("A".into_node_id(), id);
        assert_eq!(String::from("A").into_node_id(), id);
        assert_eq!((&id).into_node_id(), id);
    }

    #[test]
    fn test_node_id() {
        let id = NodeId::new("http://ex.org/Alice");
        assert_eq!(id.as_str(), "http://ex.org/Alice");
        assert_eq!(format!("{}", id), "http://ex.org/Alice");

        let id2: NodeId = 100u64.into();
        assert_eq!(id2.as_str(), "100");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(NodeId::generate(), NodeId::generate());
    }

    #[test]
    fn test_label() {
        let label = Label::new("Person");
        assert_eq!(label.as_str(), "Person");
        assert_eq!(format!("{}", label), "Person");

        let label2: Label = "Employee".into();
        assert_eq!(label2.as_str(), "Employee");
    }

    #[test]
    fn test_edge_key() {
        let key = EdgeKey::new("A", "B", "knows");
        assert_eq!(format!("{}", key), "(A)-[knows]->(B)");
        assert!(!key.is_self_loop());
        assert!(EdgeKey::new("A", "A", "likes").is_self_loop());

        // Same endpoints, different kind: distinct identities
        assert_ne!(key, EdgeKey::new("A", "B", "likes"));
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&NodeId::new("A")).unwrap();
        assert_eq!(json, "\"A\"");
        let kind: EdgeKind = serde_json::from_str("\"knows\"").unwrap();
        assert_eq!(kind.as_str(), "knows");
    }
}
