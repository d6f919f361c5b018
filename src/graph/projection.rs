//! Projections of the store into plain `petgraph` graphs
//!
//! The algorithms crate works on `petgraph::Graph`; these builders produce
//! the two shapes it needs. Node `i` of a projection is the `i`-th node of
//! the store's iteration order, and its weight is the node id.

use super::multigraph::MultiDiGraph;
use super::types::{EdgeKind, NodeId};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::{Directed, Undirected};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Projection graph with node ids as weights
pub type Projection<Ty, E> = Graph<NodeId, E, Ty>;

/// Directed projection keeping parallel edges and self-loops
pub type DirectedProjection = Projection<Directed, EdgeKind>;

/// Undirected projection, one edge per unordered pair and at most one
/// self-loop per node
pub type SimpleProjection = Projection<Undirected, ()>;

fn add_nodes<Ty: petgraph::EdgeType, E>(
    store: &MultiDiGraph,
    graph: &mut Projection<Ty, E>,
) -> FxHashMap<NodeId, NodeIndex> {
    let mut index = FxHashMap::default();
    for (id, _) in store.nodes() {
        index.insert(id.clone(), graph.add_node(id.clone()));
    }
    index
}

/// Lossless directed copy of the structure
pub fn to_directed(store: &MultiDiGraph) -> DirectedProjection {
    let mut graph = Graph::with_capacity(store.node_count(), store.edge_count());
    let index = add_nodes(store, &mut graph);
    for edge in store.edges() {
        if let (Some(&s), Some(&t)) = (index.get(edge.source), index.get(edge.target)) {
            graph.add_edge(s, t, edge.data.kind.clone());
        }
    }
    trace!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built directed projection"
    );
    graph
}

/// Undirected view: direction, kinds and multiplicity are dropped. A node
/// with any self-loop keeps exactly one.
pub fn to_simple_undirected(store: &MultiDiGraph) -> SimpleProjection {
    let mut graph = Graph::with_capacity(store.node_count(), store.edge_count());
    let index = add_nodes(store, &mut graph);
    let mut seen: FxHashSet<(NodeIndex, NodeIndex)> = FxHashSet::default();
    for edge in store.edges() {
        let (Some(&s), Some(&t)) = (index.get(edge.source), index.get(edge.target)) else {
            continue;
        };
        let pair = if s < t { (s, t) } else { (t, s) };
        if seen.insert(pair) {
            graph.add_edge(pair.0, pair.1, ());
        }
    }
    trace!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built simple undirected projection"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::multigraph::EdgeData;
    use crate::graph::PropertyMap;

    fn sample() -> MultiDiGraph {
        let mut g = MultiDiGraph::new();
        let a = NodeId::new("A");
        let b = NodeId::new("B");
        g.add_edge(&a, &b, EdgeData::new("knows", PropertyMap::new()));
        g.add_edge(&a, &b, EdgeData::new("likes", PropertyMap::new()));
        g.add_edge(&b, &a, EdgeData::new("knows", PropertyMap::new()));
        g.add_edge(&b, &b, EdgeData::new("likes", PropertyMap::new()));
        g.ensure_node(&NodeId::new("C"));
        g
    }

    #[test]
    fn test_directed_projection_is_lossless() {
        let g = sample();
        let p = to_directed(&g);
        assert_eq!(p.node_count(), 3);
        assert_eq!(p.edge_count(), 4);
        assert_eq!(p[NodeIndex::new(0)], NodeId::new("A"));
        assert_eq!(p[NodeIndex::new(2)], NodeId::new("C"));
    }

    #[test]
    fn test_simple_projection_collapses() {
        let g = sample();
        let p = to_simple_undirected(&g);
        assert_eq!(p.node_count(), 3);
        // A-B once, plus the loop on B
        assert_eq!(p.edge_count(), 2);
        let b = NodeIndex::new(1);
        assert!(p.find_edge(b, b).is_some());
    }

    #[test]
    fn test_simple_projection_keeps_one_loop() {
        let mut g = MultiDiGraph::new();
        let a = NodeId::new("A");
        g.add_edge(&a, &a, EdgeData::new("knows", PropertyMap::new()));
        g.add_edge(&a, &a, EdgeData::new("likes", PropertyMap::new()));
        let p = to_simple_undirected(&g);
        assert_eq!(p.node_count(), 1);
        assert_eq!(p.edge_count(), 1);
    }

    #[test]
    fn test_empty_projection() {
        let g = MultiDiGraph::new();
        assert_eq!(to_directed(&g).node_count(), 0);
        assert_eq!(to_simple_undirected(&g).edge_count(), 0);
    }
}
