//! Shared utilities for graph algorithms
//!
//! Provides the error type shared by every measure and dense adjacency views
//! (indexed by `NodeIndex::index()`) over petgraph graphs.

use petgraph::graph::{Graph, NodeIndex, UnGraph};
use petgraph::{Direction, EdgeType};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Per-node floating point result
pub type NodeScores = HashMap<NodeIndex, f64>;

/// Per-node count result
pub type NodeCounts = HashMap<NodeIndex, usize>;

/// Errors reported by measures that are undefined for some inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("measure is undefined on an empty graph")]
    EmptyGraph,

    #[error("found infinite path length because the graph is not strongly connected")]
    NotStronglyConnected,

    #[error("power iteration failed to converge within {iterations} iterations")]
    NoConvergence { iterations: usize },
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Neighbor sets ignoring direction.
///
/// Parallel edges collapse and self-loops are dropped, which is the simple
/// graph view the undirected measures are defined on.
pub fn neighbor_sets<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> Vec<HashSet<usize>> {
    let mut sets = vec![HashSet::new(); graph.node_count()];
    for edge in graph.raw_edges() {
        let (u, v) = (edge.source().index(), edge.target().index());
        if u != v {
            sets[u].insert(v);
            sets[v].insert(u);
        }
    }
    sets
}

/// Distinct successors of every node, self excluded.
///
/// On undirected graphs every neighbor is a successor.
pub fn successor_sets<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> Vec<HashSet<usize>> {
    graph
        .node_indices()
        .map(|node| {
            graph
                .neighbors_directed(node, Direction::Outgoing)
                .filter(|&w| w != node)
                .map(|w| w.index())
                .collect()
        })
        .collect()
}

/// Copy of an undirected graph with self-loops removed and node indices kept
pub fn loopless<N, E>(graph: &UnGraph<N, E>) -> UnGraph<(), ()> {
    let mut simple = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
    for _ in graph.node_indices() {
        simple.add_node(());
    }
    for edge in graph.raw_edges() {
        if edge.source() != edge.target() {
            simple.add_edge(edge.source(), edge.target(), ());
        }
    }
    simple
}

/// Neighbor lists in `direction`, one entry per edge (parallel edges repeat).
///
/// For undirected graphs both directions yield every neighbor.
pub fn adjacency<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>, direction: Direction) -> Vec<Vec<usize>> {
    graph
        .node_indices()
        .map(|node| {
            graph
                .neighbors_directed(node, direction)
                .map(|n| n.index())
                .collect()
        })
        .collect()
}

/// In-degree and out-degree of every node, counting parallel edges.
/// A self-loop adds one to both.
pub fn in_out_degrees<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> (Vec<usize>, Vec<usize>) {
    let mut in_degree = vec![0; graph.node_count()];
    let mut out_degree = vec![0; graph.node_count()];
    for edge in graph.raw_edges() {
        out_degree[edge.source().index()] += 1;
        in_degree[edge.target().index()] += 1;
    }
    (in_degree, out_degree)
}

/// Map a dense per-index vector back onto node indices
pub fn by_node<T>(values: Vec<T>) -> HashMap<NodeIndex, T> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| (NodeIndex::new(idx), value))
        .collect()
}
