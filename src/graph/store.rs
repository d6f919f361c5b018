//! Graph store facade
//!
//! `GraphStore` owns one [`MultiDiGraph`] and translates between its native
//! records and the caller-facing [`Node`] and [`Edge`] values. Everything
//! beyond record conversion, merging and lookup is delegated: analytics go
//! through [`crate::algo::GraphAlgorithms`].

use super::edge::Edge;
use super::multigraph::{EdgeData, EdgeView, MultiDiGraph, NodeData};
use super::node::{Node, LABELS_KEY};
use super::projection;
use super::property::{PropertyMap, PropertyValue};
use super::traversal::{BfsEdges, DfsEdges};
use super::types::{EdgeKey, IntoNodeId, NodeId};
use crate::config::{DanglingEdgePolicy, GraphConfig};
use attrgraph_algorithms::AlgorithmError;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeKey),

    #[error("No node has a property equal to {0}")]
    NoMatchingNode(String),

    #[error("Invalid edge: endpoint {0} does not exist")]
    DanglingEndpoint(NodeId),

    #[error("Property name '{0}' is reserved for labels")]
    ReservedKey(String),

    #[error("Cannot extract a name from '{0}'")]
    InvalidUri(String),

    #[error("Algorithm failed: {0}")]
    Algorithm(#[from] AlgorithmError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Attributed multigraph store
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    graph: MultiDiGraph,
    config: GraphConfig,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        GraphStore {
            graph: MultiDiGraph::new(),
            config,
        }
    }

    /// Wrap a multigraph built elsewhere
    pub fn from_multigraph(graph: MultiDiGraph) -> Self {
        GraphStore {
            graph,
            config: GraphConfig::default(),
        }
    }

    pub fn multigraph(&self) -> &MultiDiGraph {
        &self.graph
    }

    pub fn into_multigraph(self) -> MultiDiGraph {
        self.graph
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    // ---- mutation ----

    /// Insert a node, replacing the labels and properties of an existing node
    /// with the same id. Incident edges are kept.
    pub fn add_node(&mut self, node: Node) -> GraphResult<()> {
        if node.properties.contains_key(LABELS_KEY) {
            return Err(GraphError::ReservedKey(LABELS_KEY.to_string()));
        }
        debug!(node = %node.id, labels = node.labels.len(), "add node");
        let id = node.id.clone();
        self.graph.add_node(id, NodeData::from(node));
        Ok(())
    }

    /// Insert an edge, replacing the properties of an existing edge with the
    /// same identity triple
    ///
    /// Only the endpoint ids are read from `edge.source` and `edge.target`.
    /// Missing endpoints follow the configured [`DanglingEdgePolicy`].
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        let Edge {
            source,
            target,
            kind,
            properties,
        } = edge;

        for endpoint in [&source.id, &target.id] {
            if self.graph.contains_node(endpoint) {
                continue;
            }
            match self.config.dangling_edges {
                DanglingEdgePolicy::Reject => {
                    return Err(GraphError::DanglingEndpoint(endpoint.clone()));
                }
                DanglingEdgePolicy::AutoCreate => {
                    warn!(node = %endpoint, "edge endpoint missing, creating placeholder node");
                }
            }
        }

        debug!(source = %source.id, target = %target.id, kind = %kind, "add edge");
        self.graph
            .add_edge(&source.id, &target.id, EdgeData::new(kind, properties));
        Ok(())
    }

    /// Remove a node and every edge touching it
    pub fn remove_node(&mut self, node: impl IntoNodeId) -> GraphResult<()> {
        let id = node.into_node_id();
        match self.graph.remove_node(&id) {
            Some(_) => {
                debug!(node = %id, "remove node");
                Ok(())
            }
            None => Err(GraphError::NodeNotFound(id)),
        }
    }

    /// Remove exactly the edge with this identity triple
    pub fn remove_edge(&mut self, edge: &Edge) -> GraphResult<()> {
        let key = edge.key();
        match self.graph.remove_edge(&key) {
            Some(_) => {
                debug!(edge = %key, "remove edge");
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound(key)),
        }
    }

    /// Fold `nodes` into `subject`
    ///
    /// Every edge between a folded node and a node outside the merge is moved
    /// onto the subject; the folded nodes are then removed. Edges between
    /// folded nodes and the subject, edges among folded nodes and self-loops
    /// on folded nodes disappear. A moved edge whose identity already exists
    /// on the subject overwrites its properties.
    ///
    /// All ids are checked before anything changes. Returns the number of
    /// moved edges.
    pub fn merge_nodes<I>(&mut self, subject: impl IntoNodeId, nodes: I) -> GraphResult<usize>
    where
        I: IntoIterator,
        I::Item: IntoNodeId,
    {
        let subject = subject.into_node_id();
        if !self.graph.contains_node(&subject) {
            return Err(GraphError::NodeNotFound(subject));
        }

        let mut folded: Vec<NodeId> = Vec::new();
        let mut members: FxHashSet<NodeId> = FxHashSet::default();
        for node in nodes {
            let id = node.into_node_id();
            if !self.graph.contains_node(&id) {
                return Err(GraphError::NodeNotFound(id));
            }
            if id != subject && members.insert(id.clone()) {
                folded.push(id);
            }
        }
        members.insert(subject.clone());

        let mut moved = 0;
        for id in &folded {
            let incoming: Vec<(EdgeKey, PropertyMap)> =
                self.graph.in_edges(id).map(relocation).collect();
            let outgoing: Vec<(EdgeKey, PropertyMap)> =
                self.graph.out_edges(id).map(relocation).collect();

            for (key, properties) in incoming {
                if self.graph.remove_edge(&key).is_none() || members.contains(&key.source) {
                    continue;
                }
                self.graph
                    .add_edge(&key.source, &subject, EdgeData::new(key.kind, properties));
                moved += 1;
            }
            for (key, properties) in outgoing {
                if self.graph.remove_edge(&key).is_none() || members.contains(&key.target) {
                    continue;
                }
                self.graph
                    .add_edge(&subject, &key.target, EdgeData::new(key.kind, properties));
                moved += 1;
            }
            self.graph.remove_node(id);
        }

        debug!(subject = %subject, folded = folded.len(), moved, "merged nodes");
        Ok(moved)
    }

    // ---- lookup ----

    pub fn has_node(&self, node: impl IntoNodeId) -> bool {
        self.graph.contains_node(&node.into_node_id())
    }

    /// True if an edge with the same identity triple is stored
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.graph.contains_edge(&edge.key())
    }

    pub fn contains_edge(&self, key: &EdgeKey) -> bool {
        self.graph.contains_edge(key)
    }

    /// Reconstructed record of one node
    pub fn get_node(&self, node: impl IntoNodeId) -> GraphResult<Node> {
        let id = node.into_node_id();
        self.graph
            .node_record(&id)
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Every node, materialized
    pub fn get_nodes(&self) -> Vec<Node> {
        self.nodes().collect()
    }

    /// Reconstructed records of the stored edge with this identity
    pub fn get_edge(&self, key: &EdgeKey) -> GraphResult<Edge> {
        let data = self
            .graph
            .edge(key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.clone()))?;
        self.materialize(EdgeView {
            source: &key.source,
            target: &key.target,
            data,
        })
        .ok_or_else(|| GraphError::EdgeNotFound(key.clone()))
    }

    /// Nodes holding a property equal to `value`
    pub fn find_nodes_by_value(&self, value: &PropertyValue) -> GraphResult<Vec<Node>> {
        let found: Vec<Node> = self.nodes().filter(|n| n.has_value(value)).collect();
        if found.is_empty() {
            return Err(GraphError::NoMatchingNode(value.to_string()));
        }
        Ok(found)
    }

    // ---- iteration ----

    /// All nodes, rebuilt lazily from storage
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.nodes().map(|(id, data)| Node {
            id: id.clone(),
            labels: data.labels.clone(),
            properties: data.properties.clone(),
        })
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.graph.nodes().map(|(id, _)| id)
    }

    /// All edges with both endpoints rebuilt
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edges().filter_map(move |e| self.materialize(e))
    }

    /// Edges touching `node` in either direction; a self-loop appears once
    pub fn node_edges(&self, node: impl IntoNodeId) -> GraphResult<impl Iterator<Item = Edge> + '_> {
        let id = self.existing(node)?;
        Ok(self
            .graph
            .node_edges(&id)
            .filter_map(move |e| self.materialize(e)))
    }

    /// Edges entering `node`
    pub fn in_edges(&self, node: impl IntoNodeId) -> GraphResult<impl Iterator<Item = Edge> + '_> {
        let id = self.existing(node)?;
        Ok(self
            .graph
            .in_edges(&id)
            .filter_map(move |e| self.materialize(e)))
    }

    /// Edges leaving `node`
    pub fn out_edges(&self, node: impl IntoNodeId) -> GraphResult<impl Iterator<Item = Edge> + '_> {
        let id = self.existing(node)?;
        Ok(self
            .graph
            .out_edges(&id)
            .filter_map(move |e| self.materialize(e)))
    }

    /// Breadth-first tree edges from `source` along out-edges
    pub fn bfs(&self, source: impl IntoNodeId) -> GraphResult<BfsEdges<'_>> {
        let root = self.index(source)?;
        Ok(BfsEdges::new(&self.graph, root))
    }

    /// Depth-first tree edges from `source` along out-edges
    pub fn dfs(&self, source: impl IntoNodeId) -> GraphResult<DfsEdges<'_>> {
        let root = self.index(source)?;
        Ok(DfsEdges::new(&self.graph, root))
    }

    // ---- structure ----

    /// In-degree plus out-degree; a self-loop counts twice
    pub fn degree(&self, node: impl IntoNodeId) -> GraphResult<usize> {
        let id = node.into_node_id();
        self.graph.degree(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn is_isolate(&self, node: impl IntoNodeId) -> GraphResult<bool> {
        Ok(self.degree(node)? == 0)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Structural equality of the two directed multigraphs; ids, labels and
    /// properties are ignored
    pub fn is_isomorphic(&self, other: &GraphStore) -> bool {
        if self.node_count() != other.node_count() || self.edge_count() != other.edge_count() {
            return false;
        }
        let a = projection::to_directed(&self.graph);
        let b = projection::to_directed(&other.graph);
        petgraph::algo::is_isomorphic(&a, &b)
    }

    fn existing(&self, node: impl IntoNodeId) -> GraphResult<NodeId> {
        let id = node.into_node_id();
        if self.graph.contains_node(&id) {
            Ok(id)
        } else {
            Err(GraphError::NodeNotFound(id))
        }
    }

    fn index(&self, node: impl IntoNodeId) -> GraphResult<petgraph::stable_graph::NodeIndex> {
        let id = node.into_node_id();
        self.graph.index_of(&id).ok_or(GraphError::NodeNotFound(id))
    }

    fn materialize(&self, view: EdgeView<'_>) -> Option<Edge> {
        Some(Edge {
            source: self.graph.node_record(view.source)?,
            target: self.graph.node_record(view.target)?,
            kind: view.data.kind.clone(),
            properties: view.data.properties.clone(),
        })
    }
}

fn relocation(view: EdgeView<'_>) -> (EdgeKey, PropertyMap) {
    (view.key(), view.data.properties.clone())
}

impl<'a> IntoIterator for &'a GraphStore {
    type Item = &'a NodeId;
    type IntoIter = Box<dyn Iterator<Item = &'a NodeId> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.node_ids())
    }
}
