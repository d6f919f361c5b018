//! Native multigraph storage
//!
//! A `petgraph` stable directed graph holds the node and edge records. Two
//! hash indexes sit beside it:
//! - node_index: NodeId -> NodeIndex
//! - edge_index: EdgeKey -> EdgeIndex (one edge per identity triple)
//!
//! Stable indices survive removals, so both indexes stay valid while nodes
//! and edges come and go.

use super::node::Node;
use super::property::PropertyMap;
use super::types::{EdgeKey, EdgeKind, Label, NodeId};
use indexmap::IndexSet;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Native node record: labels and properties, no id
///
/// In serialized form labels sit under the reserved `"key"` attribute next
/// to the properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(rename = "key", default)]
    pub labels: IndexSet<Label>,
    #[serde(flatten)]
    pub properties: PropertyMap,
}

impl NodeData {
    pub fn new(labels: IndexSet<Label>, properties: PropertyMap) -> Self {
        NodeData { labels, properties }
    }
}

impl From<Node> for NodeData {
    fn from(node: Node) -> Self {
        NodeData {
            labels: node.labels,
            properties: node.properties,
        }
    }
}

/// Native edge record: kind and properties, endpoints live in the graph
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub kind: EdgeKind,
    pub properties: PropertyMap,
}

impl EdgeData {
    pub fn new(kind: impl Into<EdgeKind>, properties: PropertyMap) -> Self {
        EdgeData {
            kind: kind.into(),
            properties,
        }
    }
}

/// Node weight stored in the petgraph graph
#[derive(Debug, Clone)]
pub struct NodeSlot {
    pub id: NodeId,
    pub data: NodeData,
}

/// Borrowed view of one stored edge
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub source: &'a NodeId,
    pub target: &'a NodeId,
    pub data: &'a EdgeData,
}

impl EdgeView<'_> {
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            source: self.source.clone(),
            target: self.target.clone(),
            kind: self.data.kind.clone(),
        }
    }
}

/// Directed keyed multigraph with id-addressed nodes
#[derive(Debug, Clone, Default)]
pub struct MultiDiGraph {
    graph: StableDiGraph<NodeSlot, EdgeData>,
    node_index: FxHashMap<NodeId, NodeIndex>,
    edge_index: FxHashMap<EdgeKey, EdgeIndex>,
}

impl MultiDiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying petgraph graph, for projections and traversals
    pub fn graph(&self) -> &StableDiGraph<NodeSlot, EdgeData> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn id_at(&self, idx: NodeIndex) -> Option<&NodeId> {
        self.graph.node_weight(idx).map(|slot| &slot.id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_edge(&self, key: &EdgeKey) -> bool {
        self.edge_index.contains_key(key)
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeData> {
        let idx = self.index_of(id)?;
        self.graph.node_weight(idx).map(|slot| &slot.data)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&EdgeData> {
        let idx = self.edge_index.get(key)?;
        self.graph.edge_weight(*idx)
    }

    /// Rebuild the caller-facing record of a stored node
    pub fn node_record(&self, id: &NodeId) -> Option<Node> {
        self.node(id).map(|data| Node {
            id: id.clone(),
            labels: data.labels.clone(),
            properties: data.properties.clone(),
        })
    }

    /// Insert a node or replace the record of an existing one
    ///
    /// Incident edges of an existing node are kept.
    pub fn add_node(&mut self, id: NodeId, data: NodeData) -> NodeIndex {
        if let Some(idx) = self.index_of(&id) {
            if let Some(slot) = self.graph.node_weight_mut(idx) {
                slot.data = data;
            }
            return idx;
        }
        let idx = self.graph.add_node(NodeSlot {
            id: id.clone(),
            data,
        });
        self.node_index.insert(id, idx);
        idx
    }

    /// Index of `id`, creating an empty node when absent.
    /// The flag is true when a node was created.
    pub fn ensure_node(&mut self, id: &NodeId) -> (NodeIndex, bool) {
        match self.index_of(id) {
            Some(idx) => (idx, false),
            None => (self.add_node(id.clone(), NodeData::default()), true),
        }
    }

    /// Insert an edge or replace the properties of the existing identity
    /// triple. Missing endpoints are created empty.
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId, data: EdgeData) -> EdgeIndex {
        let key = EdgeKey {
            source: source.clone(),
            target: target.clone(),
            kind: data.kind.clone(),
        };
        if let Some(&idx) = self.edge_index.get(&key) {
            if let Some(weight) = self.graph.edge_weight_mut(idx) {
                *weight = data;
            }
            return idx;
        }
        let (s, _) = self.ensure_node(source);
        let (t, _) = self.ensure_node(target);
        let idx = self.graph.add_edge(s, t, data);
        self.edge_index.insert(key, idx);
        idx
    }

    /// Remove a node together with every edge touching it
    pub fn remove_node(&mut self, id: &NodeId) -> Option<NodeData> {
        let idx = self.node_index.remove(id)?;
        let incident: Vec<EdgeKey> = self.incident(idx).map(|e| e.key()).collect();
        for key in incident {
            self.edge_index.remove(&key);
        }
        self.graph.remove_node(idx).map(|slot| slot.data)
    }

    /// Remove exactly one identity triple
    pub fn remove_edge(&mut self, key: &EdgeKey) -> Option<EdgeData> {
        let idx = self.edge_index.remove(key)?;
        self.graph.remove_edge(idx)
    }

    /// All nodes in storage order
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &NodeData)> + '_ {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx))
            .map(|slot| (&slot.id, &slot.data))
    }

    /// All edges in storage order
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        self.graph.edge_indices().filter_map(move |idx| {
            let (source, target) = self.graph.edge_endpoints(idx)?;
            self.view(source, target, self.graph.edge_weight(idx)?)
        })
    }

    /// Edges leaving `id`; empty when the node is absent
    pub fn out_edges<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        self.directed(id, Direction::Outgoing)
    }

    /// Edges entering `id`; empty when the node is absent
    pub fn in_edges<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        self.directed(id, Direction::Incoming)
    }

    /// Edges touching `id` in either direction, self-loops once
    pub fn node_edges<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        let idx = self.index_of(id);
        idx.into_iter().flat_map(move |idx| self.incident(idx))
    }

    /// In-degree plus out-degree; a self-loop counts twice
    pub fn degree(&self, id: &NodeId) -> Option<usize> {
        let idx = self.index_of(id)?;
        let out = self.graph.edges_directed(idx, Direction::Outgoing).count();
        let inc = self.graph.edges_directed(idx, Direction::Incoming).count();
        Some(out + inc)
    }

    fn directed<'a>(
        &'a self,
        id: &NodeId,
        dir: Direction,
    ) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        let idx = self.index_of(id);
        idx.into_iter().flat_map(move |idx| {
            self.graph
                .edges_directed(idx, dir)
                .filter_map(move |e| self.view(e.source(), e.target(), e.weight()))
        })
    }

    fn incident(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        let outgoing = self.graph.edges_directed(idx, Direction::Outgoing);
        let incoming = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .filter(|e| e.source() != e.target());
        outgoing
            .chain(incoming)
            .filter_map(move |e| self.view(e.source(), e.target(), e.weight()))
    }

    fn view<'a>(
        &'a self,
        source: NodeIndex,
        target: NodeIndex,
        data: &'a EdgeData,
    ) -> Option<EdgeView<'a>> {
        Some(EdgeView {
            source: self.id_at(source)?,
            target: self.id_at(target)?,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn knows() -> EdgeData {
        EdgeData::new("knows", PropertyMap::new())
    }

    #[test]
    fn test_add_node_overwrites_record() {
        let mut g = MultiDiGraph::new();
        let mut labels = IndexSet::new();
        labels.insert(Label::new("Person"));
        let first = g.add_node(id("A"), NodeData::new(labels, PropertyMap::new()));
        let second = g.add_node(id("A"), NodeData::default());

        assert_eq!(first, second);
        assert_eq!(g.node_count(), 1);
        assert!(g.node(&id("A")).unwrap().labels.is_empty());
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut g = MultiDiGraph::new();
        g.add_edge(&id("A"), &id("B"), knows());

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains_edge(&EdgeKey::new("A", "B", "knows")));
    }

    #[test]
    fn test_parallel_edges_keyed_by_kind() {
        let mut g = MultiDiGraph::new();
        g.add_edge(&id("A"), &id("B"), knows());
        g.add_edge(&id("A"), &id("B"), EdgeData::new("likes", PropertyMap::new()));
        assert_eq!(g.edge_count(), 2);

        let mut props = PropertyMap::new();
        props.insert("since".to_string(), 2020i64.into());
        g.add_edge(&id("A"), &id("B"), EdgeData::new("knows", props.clone()));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge(&EdgeKey::new("A", "B", "knows")).unwrap().properties, props);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut g = MultiDiGraph::new();
        g.add_edge(&id("A"), &id("B"), knows());
        g.add_edge(&id("B"), &id("C"), knows());
        g.add_edge(&id("B"), &id("B"), knows());
        g.add_edge(&id("A"), &id("C"), knows());

        assert!(g.remove_node(&id("B")).is_some());
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.contains_edge(&EdgeKey::new("A", "B", "knows")));
        assert!(!g.contains_edge(&EdgeKey::new("B", "B", "knows")));
        assert!(g.contains_edge(&EdgeKey::new("A", "C", "knows")));
        assert!(g.remove_node(&id("B")).is_none());
    }

    #[test]
    fn test_remove_edge() {
        let mut g = MultiDiGraph::new();
        g.add_edge(&id("A"), &id("B"), knows());
        let key = EdgeKey::new("A", "B", "knows");

        assert!(g.remove_edge(&key).is_some());
        assert!(g.remove_edge(&key).is_none());
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_directional_views() {
        let mut g = MultiDiGraph::new();
        g.add_edge(&id("A"), &id("B"), knows());
        g.add_edge(&id("C"), &id("B"), knows());
        g.add_edge(&id("B"), &id("B"), knows());

        assert_eq!(g.out_edges(&id("B")).count(), 1);
        assert_eq!(g.in_edges(&id("B")).count(), 3);
        assert_eq!(g.node_edges(&id("B")).count(), 3);
        assert_eq!(g.degree(&id("B")), Some(4));
        assert_eq!(g.out_edges(&id("Z")).count(), 0);
        assert_eq!(g.degree(&id("Z")), None);
    }

    #[test]
    fn test_views_report_true_endpoints() {
        let mut g = MultiDiGraph::new();
        g.add_edge(&id("A"), &id("B"), knows());
        let incoming: Vec<EdgeKey> = g.in_edges(&id("B")).map(|e| e.key()).collect();
        assert_eq!(incoming, vec![EdgeKey::new("A", "B", "knows")]);
    }

    #[test]
    fn test_node_data_joined_attributes() {
        let json = r#"{"key": ["Person", "Employee"], "name": "Alice", "age": 30}"#;
        let data: NodeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.labels.len(), 2);
        assert_eq!(data.properties.len(), 2);
        assert!(!data.properties.contains_key("key"));
        assert_eq!(data.properties.get("age").unwrap().as_integer(), Some(30));

        let bare: NodeData = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        assert!(bare.labels.is_empty());
    }
}
