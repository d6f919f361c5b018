//! Centrality measures
//!
//! Thin wrappers over `rustworkx_core::centrality`. Closeness measures
//! distances towards each node (incoming paths on directed graphs) and
//! betweenness is normalized by `1 / ((n - 1)(n - 2))`.

use super::common::NodeScores;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::Direction;
use rustworkx_core::centrality;

/// Node count from which rustworkx fans per-source work out over rayon
pub const PARALLEL_THRESHOLD: usize = 50;

fn scores_by_node(values: Vec<Option<f64>>) -> NodeScores {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, score)| score.map(|s| (NodeIndex::new(idx), s)))
        .collect()
}

/// Degree (in + out, parallel edges and self-loops counted) divided by `n - 1`.
/// Graphs with a single node score it 1.
pub fn degree_centrality<N, E>(graph: &DiGraph<N, E>) -> NodeScores {
    let n = graph.node_count();
    if n <= 1 {
        return graph.node_indices().map(|v| (v, 1.0)).collect();
    }

    let outgoing = centrality::degree_centrality(graph, Some(Direction::Outgoing));
    let incoming = centrality::degree_centrality(graph, Some(Direction::Incoming));
    outgoing
        .into_iter()
        .zip(incoming)
        .enumerate()
        .map(|(idx, (out, inc))| (NodeIndex::new(idx), out + inc))
        .collect()
}

/// Closeness centrality with the Wasserman-Faust correction for graphs that
/// are not strongly connected: `(r - 1) / sum(d) * (r - 1) / (n - 1)` where
/// `r` counts the nodes that reach the scored node.
pub fn closeness_centrality<N: Sync, E: Sync>(graph: &DiGraph<N, E>) -> NodeScores {
    scores_by_node(centrality::closeness_centrality(
        graph,
        true,
        PARALLEL_THRESHOLD,
    ))
}

/// Normalized shortest-path betweenness on the simple undirected view,
/// endpoints excluded.
pub fn betweenness_centrality<N: Sync, E: Sync>(graph: &UnGraph<N, E>) -> NodeScores {
    scores_by_node(centrality::betweenness_centrality(
        graph,
        false,
        true,
        PARALLEL_THRESHOLD,
    ))
}
