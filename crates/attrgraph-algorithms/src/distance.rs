//! Distance measures
//!
//! Eccentricity, diameter and radius over unit edge lengths. Every node must
//! reach every other node, otherwise the measures are undefined and an error
//! is returned instead of an infinite distance.

use super::common::{AlgorithmError, AlgorithmResult};
use petgraph::algo::dijkstra;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::EdgeType;
use std::collections::HashMap;

/// Greatest shortest-path length from each node to any other node
pub fn eccentricity<N, E, Ty: EdgeType>(
    graph: &Graph<N, E, Ty>,
) -> AlgorithmResult<HashMap<NodeIndex, usize>> {
    let n = graph.node_count();
    if n == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }

    graph
        .node_indices()
        .map(|start| {
            let lengths = dijkstra(graph, start, None, |_| 1usize);
            if lengths.len() != n {
                return Err(AlgorithmError::NotStronglyConnected);
            }
            Ok((start, lengths.values().copied().max().unwrap_or(0)))
        })
        .collect()
}

/// Maximum eccentricity
pub fn diameter<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> AlgorithmResult<usize> {
    eccentricity(graph)?
        .into_values()
        .max()
        .ok_or(AlgorithmError::EmptyGraph)
}

/// Minimum eccentricity
pub fn radius<N, E, Ty: EdgeType>(graph: &Graph<N, E, Ty>) -> AlgorithmResult<usize> {
    eccentricity(graph)?
        .into_values()
        .min()
        .ok_or(AlgorithmError::EmptyGraph)
}
