//! Degree assortativity
//!
//! Pearson correlation between the out-degree of each edge's source and the
//! in-degree of its target, every edge counted with its multiplicity.

use super::common::in_out_degrees;
use petgraph::graph::DiGraph;

/// `None` when the coefficient is undefined (no edges, or one side of every
/// edge has the same degree).
pub fn degree_assortativity_coefficient<N, E>(graph: &DiGraph<N, E>) -> Option<f64> {
    let (in_degree, out_degree) = in_out_degrees(graph);
    let pairs: Vec<(f64, f64)> = graph
        .raw_edges()
        .iter()
        .map(|edge| {
            (
                out_degree[edge.source().index()] as f64,
                in_degree[edge.target().index()] as f64,
            )
        })
        .collect();

    if pairs.is_empty() {
        return None;
    }

    let m = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / m;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / m;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(covariance / denominator)
    }
}
