//! Triangle and clustering measures
//!
//! Triangles and clustering coefficients work on the simple undirected view
//! of the graph; square clustering follows edge direction.

use super::common::{by_node, neighbor_sets, successor_sets, NodeCounts, NodeScores};
use petgraph::graph::{Graph, NodeIndex, UnGraph};
use petgraph::EdgeType;
use rustworkx_core::transitivity::graph_transitivity;
use std::collections::HashSet;

/// Triangles through each node (as a dense vector)
fn triangles_per_node(adj: &[HashSet<usize>]) -> Vec<usize> {
    adj.iter()
        .enumerate()
        .map(|(v, neighbors)| {
            let closed: usize = neighbors
                .iter()
                .map(|&u| adj[u].intersection(neighbors).filter(|&&w| w != v).count())
                .sum();
            // Each triangle (v, u, w) is seen from both u and w
            closed / 2
        })
        .collect()
}

/// Number of triangles each node belongs to
pub fn triangles<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> NodeCounts {
    by_node(triangles_per_node(&neighbor_sets(graph)))
}

/// Total number of triangles in the graph, each counted once
pub fn count_triangles<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> usize {
    triangles_per_node(&neighbor_sets(graph)).iter().sum::<usize>() / 3
}

/// Local clustering coefficient of every node: the fraction of possible
/// links between a node's neighbors that exist. Zero below degree two.
pub fn clustering<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> NodeScores {
    let adj = neighbor_sets(graph);
    let tri = triangles_per_node(&adj);
    by_node(
        adj.iter()
            .zip(tri)
            .map(|(neighbors, t)| {
                let d = neighbors.len();
                if d < 2 {
                    0.0
                } else {
                    2.0 * t as f64 / (d * (d - 1)) as f64
                }
            })
            .collect(),
    )
}

/// Mean local clustering over all nodes, zeros included. 0 on an empty graph.
pub fn average_clustering<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }
    clustering(graph).values().sum::<f64>() / n as f64
}

/// Fraction of connected triples that close into triangles.
///
/// Expects a simple undirected graph: self-loops are ignored but parallel
/// edges would be counted twice.
pub fn transitivity<N: Sync, E: Sync>(graph: &UnGraph<N, E>) -> f64 {
    graph_transitivity(graph)
}

/// Squares clustering: for every pair of neighbors `u, w` of `v`, the
/// fraction of possible squares `v-u-x-w` that exist.
///
/// Neighborhoods are distinct successors with self-loops dropped, so on a
/// directed graph a node needs two successors to close any square.
pub fn square_clustering<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> NodeScores {
    let adj = successor_sets(graph);
    let mut scores = NodeScores::with_capacity(adj.len());

    for (v, neighbors) in adj.iter().enumerate() {
        let neighbors: Vec<usize> = neighbors.iter().copied().collect();
        let mut squares_total = 0.0;
        let mut potential = 0.0;

        for (i, &u) in neighbors.iter().enumerate() {
            for &w in &neighbors[i + 1..] {
                let squares = adj[u].intersection(&adj[w]).filter(|&&x| x != v).count() as f64;
                squares_total += squares;
                let from_u = 1.0 + squares + if adj[u].contains(&w) { 1.0 } else { 0.0 };
                let from_w = 1.0 + squares + if adj[w].contains(&u) { 1.0 } else { 0.0 };
                potential += (adj[u].len() as f64 - from_u) + (adj[w].len() as f64 - from_w) + squares;
            }
        }

        let score = if potential > 0.0 {
            squares_total / potential
        } else {
            squares_total
        };
        scores.insert(NodeIndex::new(v), score);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, UnGraph};

    fn complete(n: u32) -> UnGraph<(), ()> {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        UnGraph::from_edges(&edges)
    }

    #[test]
    fn test_triangle_counting() {
        // Complete graph K4: 4 nodes, all connected.
        // Triangles: (0,1,2), (0,1,3), (0,2,3), (1,2,3) -> 4 triangles.
        let graph = complete(4);
        assert_eq!(count_triangles(&graph), 4);
        assert_eq!(triangles(&graph)[&NodeIndex::new(0)], 3);
    }

    #[test]
    fn test_directed_input_is_symmetrized() {
        let graph = DiGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0), (0, 2)]);
        assert_eq!(count_triangles(&graph), 1);
    }

    #[test]
    fn test_clustering_coefficients() {
        // Triangle 0-1-2 with pendant 3 on node 2
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let local = clustering(&graph);
        assert_eq!(local[&NodeIndex::new(0)], 1.0);
        assert!((local[&NodeIndex::new(2)] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(local[&NodeIndex::new(3)], 0.0);

        let expected_average = (1.0 + 1.0 + 1.0 / 3.0 + 0.0) / 4.0;
        assert!((average_clustering(&graph) - expected_average).abs() < 1e-12);

        // 3 closed triangles * 2 / (2 + 2 + 6 + 0) triads
        assert!((transitivity(&graph) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_transitivity_without_triangles() {
        let path = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2)]);
        assert_eq!(transitivity(&path), 0.0);
        assert_eq!(transitivity(&complete(5)), 1.0);
    }

    #[test]
    fn test_square_clustering_of_four_cycle() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let scores = square_clustering(&graph);
        for v in 0..4 {
            assert!((scores[&NodeIndex::new(v)] - 1.0).abs() < 1e-12);
        }

        let path = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2)]);
        assert_eq!(square_clustering(&path)[&NodeIndex::new(1)], 0.0);
    }

    #[test]
    fn test_square_clustering_follows_direction() {
        // Directed 4-cycle: each node has a single successor
        let cycle = DiGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(square_clustering(&cycle).values().all(|&c| c == 0.0));

        // Both directions on every edge behave like the undirected square
        let both = DiGraph::<(), ()>::from_edges(&[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 3),
            (3, 2),
            (3, 0),
            (0, 3),
        ]);
        assert!(square_clustering(&both)
            .values()
            .all(|&c| (c - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_triangle_measures_ignore_self_loops() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0), (0, 0)]);
        assert_eq!(count_triangles(&graph), 1);
        assert_eq!(clustering(&graph)[&NodeIndex::new(0)], 1.0);
        assert_eq!(transitivity(&graph), 1.0);
    }
}
