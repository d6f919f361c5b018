//! Connectivity algorithms
//!
//! Strong, weak and attracting components come from petgraph's SCC and
//! union-find primitives. Node connectivity runs petgraph's Ford-Fulkerson
//! max flow on the node-split auxiliary graph, one flow per candidate pair
//! in parallel.

use super::common::{in_out_degrees, neighbor_sets, successor_sets};
use petgraph::algo::{connected_components, ford_fulkerson, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use rayon::prelude::*;
use std::collections::HashSet;

/// Number of strongly connected components
pub fn number_strongly_connected_components<N, E>(graph: &DiGraph<N, E>) -> usize {
    tarjan_scc(graph).len()
}

/// Whether every node reaches every other node. False on an empty graph.
pub fn is_strongly_connected<N, E>(graph: &DiGraph<N, E>) -> bool {
    graph.node_count() > 0 && number_strongly_connected_components(graph) == 1
}

/// Number of weakly connected components (edge direction ignored)
pub fn number_weakly_connected_components<N, E>(graph: &DiGraph<N, E>) -> usize {
    connected_components(graph)
}

/// Whether the graph is connected when edge direction is ignored.
/// False on an empty graph.
pub fn is_weakly_connected<N, E>(graph: &DiGraph<N, E>) -> bool {
    graph.node_count() > 0 && connected_components(graph) == 1
}

/// Strongly connected components with no edge leaving them
pub fn attracting_components<N, E>(graph: &DiGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let sccs = tarjan_scc(graph);

    let mut component = vec![0; graph.node_count()];
    for (c, members) in sccs.iter().enumerate() {
        for member in members {
            component[member.index()] = c;
        }
    }

    let mut has_exit = vec![false; sccs.len()];
    for edge in graph.raw_edges() {
        let from = component[edge.source().index()];
        let to = component[edge.target().index()];
        if from != to {
            has_exit[from] = true;
        }
    }

    sccs.into_iter()
        .enumerate()
        .filter(|(c, _)| !has_exit[*c])
        .map(|(_, members)| members)
        .collect()
}

/// Number of attracting components
pub fn number_attracting_components<N, E>(graph: &DiGraph<N, E>) -> usize {
    attracting_components(graph).len()
}

/// Whether the whole graph forms a single attracting component
pub fn is_attracting_component<N, E>(graph: &DiGraph<N, E>) -> bool {
    let components = attracting_components(graph);
    components.len() == 1 && components[0].len() == graph.node_count()
}

/// Node connectivity: the minimum number of nodes whose removal disconnects
/// the graph.
///
/// A graph that is not weakly connected has connectivity 0. Otherwise the
/// minimum-degree node `v` bounds the answer; it is tightened by the local
/// connectivity from `v` to every non-neighbor and between every ordered
/// pair of neighbors of `v` without an edge between them. The result never
/// exceeds `n - 1`.
pub fn node_connectivity<N, E>(graph: &DiGraph<N, E>) -> usize {
    let n = graph.node_count();
    if n == 0 || !is_weakly_connected(graph) {
        return 0;
    }

    let (in_degree, out_degree) = in_out_degrees(graph);
    let successors = successor_sets(graph);
    let network = SplitNetwork::new(&successors);

    let mut v = 0;
    for candidate in 1..n {
        if in_degree[candidate] + out_degree[candidate] < in_degree[v] + out_degree[v] {
            v = candidate;
        }
    }
    let bound = (in_degree[v] + out_degree[v]).min(n - 1);

    let undirected = neighbor_sets(graph);
    let neighbors = &undirected[v];
    let mut pairs: Vec<(usize, usize)> = (0..n)
        .filter(|&w| w != v && !neighbors.contains(&w))
        .map(|w| (v, w))
        .collect();
    for &x in neighbors {
        for &y in neighbors {
            if x != y && !successors[x].contains(&y) {
                pairs.push((x, y));
            }
        }
    }

    pairs
        .into_par_iter()
        .map(|(s, t)| network.local_connectivity(s, t))
        .min()
        .map_or(bound, |k| k.min(bound))
}

/// Auxiliary flow network where node `v` becomes `2v` (in) -> `2v + 1` (out)
/// with capacity 1, and every edge `u -> v` becomes `2u + 1 -> 2v`.
struct SplitNetwork {
    graph: DiGraph<(), u32>,
}

impl SplitNetwork {
    fn new(successors: &[HashSet<usize>]) -> Self {
        let mut graph = DiGraph::with_capacity(successors.len() * 2, successors.len());
        for _ in 0..successors.len() * 2 {
            graph.add_node(());
        }
        for v in 0..successors.len() {
            graph.add_edge(NodeIndex::new(2 * v), NodeIndex::new(2 * v + 1), 1);
        }
        for (u, targets) in successors.iter().enumerate() {
            for &v in targets {
                graph.add_edge(NodeIndex::new(2 * u + 1), NodeIndex::new(2 * v), 1);
            }
        }
        Self { graph }
    }

    /// Maximum number of internally node-disjoint paths from `s` to `t`
    fn local_connectivity(&self, s: usize, t: usize) -> usize {
        let source = NodeIndex::new(2 * s + 1);
        let sink = NodeIndex::new(2 * t);
        let (flow, _) = ford_fulkerson(&self.graph, source, sink);
        flow as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed(n: usize, edges: &[(u32, u32)]) -> DiGraph<(), ()> {
        let mut graph = DiGraph::new();
        for _ in 0..n {
            graph.add_node(());
        }
        for &(u, v) in edges {
            graph.add_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize), ());
        }
        graph
    }

    #[test]
    fn test_strong_components() {
        // 0 <-> 1, 1 -> 2
        let graph = directed(3, &[(0, 1), (1, 0), (1, 2)]);
        assert_eq!(number_strongly_connected_components(&graph), 2);
        assert!(!is_strongly_connected(&graph));

        let cycle = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(is_strongly_connected(&cycle));
    }

    #[test]
    fn test_weak_components() {
        // 0 -> 1, 2 -> 3, 4 isolated
        let graph = directed(5, &[(0, 1), (2, 3)]);
        assert_eq!(number_weakly_connected_components(&graph), 3);
        assert!(!is_weakly_connected(&graph));
        assert!(is_weakly_connected(&directed(2, &[(1, 0)])));
        assert!(!is_weakly_connected(&directed(0, &[])));
    }

    #[test]
    fn test_attracting_components() {
        // 0 -> 1 <-> 2 : {1, 2} is the only sink component
        let graph = directed(3, &[(0, 1), (1, 2), (2, 1)]);
        assert_eq!(number_attracting_components(&graph), 1);
        assert!(!is_attracting_component(&graph));

        // Two isolated nodes are two attracting components
        assert_eq!(number_attracting_components(&directed(2, &[])), 2);

        let cycle = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(is_attracting_component(&cycle));
    }

    #[test]
    fn test_node_connectivity_of_path_and_cycle() {
        let path = directed(3, &[(0, 1), (1, 2)]);
        assert_eq!(node_connectivity(&path), 1);

        let cycle = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(node_connectivity(&cycle), 1);

        let disconnected = directed(3, &[(0, 1)]);
        assert_eq!(node_connectivity(&disconnected), 0);
    }

    #[test]
    fn test_node_connectivity_of_complete_digraph() {
        let mut edges = Vec::new();
        for u in 0..4 {
            for v in 0..4 {
                if u != v {
                    edges.push((u, v));
                }
            }
        }
        assert_eq!(node_connectivity(&directed(4, &edges)), 3);
        assert_eq!(node_connectivity(&directed(1, &[])), 0);
    }

    #[test]
    fn test_node_connectivity_two_disjoint_routes() {
        // 0 -> {1, 2} -> 3 and back 3 -> 0: removing one middle node keeps 0 connected to 3
        let graph = directed(4, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)]);
        let network = SplitNetwork::new(&successor_sets(&graph));
        assert_eq!(network.local_connectivity(0, 3), 2);
        assert_eq!(network.local_connectivity(1, 2), 1);
    }
}
