//! PageRank algorithm implementation
//!
//! Power iteration over the graph's links. Undirected edges link both ways,
//! parallel edges add weight, and the rank held by nodes without outgoing
//! links is spread uniformly over every node.

use super::common::{AlgorithmError, AlgorithmResult, NodeScores};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::EdgeType;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Maximum number of iterations
    pub iterations: usize,
    /// Convergence tolerance per node; iteration stops once the L1 change
    /// drops below `node_count * tolerance`
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 100,
            tolerance: 1.0e-6,
        }
    }
}

/// Calculate PageRank. Scores sum to 1.
///
/// Fails with [`AlgorithmError::NoConvergence`] when the tolerance is not
/// reached within the configured number of iterations.
pub fn page_rank<N, E, Ty: EdgeType>(
    graph: &Graph<N, E, Ty>,
    config: &PageRankConfig,
) -> AlgorithmResult<NodeScores> {
    let n = graph.node_count();
    if n == 0 {
        return Ok(NodeScores::new());
    }

    let links: Vec<Vec<usize>> = graph
        .node_indices()
        .map(|v| graph.neighbors(v).map(|w| w.index()).collect())
        .collect();

    let d = config.damping_factor;
    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];

    for _ in 0..config.iterations {
        let dangling: f64 = links
            .iter()
            .zip(&scores)
            .filter(|(out, _)| out.is_empty())
            .map(|(_, score)| score)
            .sum();

        let base = (1.0 - d) * uniform + d * dangling * uniform;
        let mut next_scores = vec![base; n];

        for (v, out) in links.iter().enumerate() {
            if out.is_empty() {
                continue;
            }
            let share = d * scores[v] / out.len() as f64;
            for &w in out {
                next_scores[w] += share;
            }
        }

        let diff: f64 = next_scores
            .iter()
            .zip(&scores)
            .map(|(next, prev)| (next - prev).abs())
            .sum();

        scores = next_scores;

        // Check convergence
        if diff < n as f64 * config.tolerance {
            return Ok(scores
                .into_iter()
                .enumerate()
                .map(|(idx, score)| (NodeIndex::new(idx), score))
                .collect());
        }
    }

    Err(AlgorithmError::NoConvergence {
        iterations: config.iterations,
    })
}
