//! Maximal cliques
//!
//! Bron-Kerbosch with pivoting over the simple undirected view.

use super::common::{neighbor_sets, NodeCounts};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashSet;

/// All maximal cliques. Isolated nodes form singleton cliques.
pub fn maximal_cliques<N, E>(graph: &UnGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let adj = neighbor_sets(graph);
    if adj.is_empty() {
        return Vec::new();
    }

    let mut cliques: Vec<Vec<usize>> = Vec::new();

    let candidates: HashSet<usize> = (0..adj.len()).collect();
    bron_kerbosch(&adj, &mut Vec::new(), candidates, HashSet::new(), &mut cliques);

    cliques
        .into_iter()
        .map(|clique| clique.into_iter().map(NodeIndex::new).collect())
        .collect()
}

fn bron_kerbosch(
    adj: &[HashSet<usize>],
    current: &mut Vec<usize>,
    mut candidates: HashSet<usize>,
    mut excluded: HashSet<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        out.push(current.clone());
        return;
    }

    let Some(pivot) = candidates
        .union(&excluded)
        .copied()
        .max_by_key(|&u| adj[u].intersection(&candidates).count())
    else {
        return;
    };

    let branches: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|v| !adj[pivot].contains(v))
        .collect();

    for v in branches {
        let next_candidates = candidates.intersection(&adj[v]).copied().collect();
        let next_excluded = excluded.intersection(&adj[v]).copied().collect();
        current.push(v);
        bron_kerbosch(adj, current, next_candidates, next_excluded, out);
        current.pop();
        candidates.remove(&v);
        excluded.insert(v);
    }
}

/// Number of maximal cliques in the graph
pub fn graph_number_of_cliques<N, E>(graph: &UnGraph<N, E>) -> usize {
    maximal_cliques(graph).len()
}

/// Number of maximal cliques each node belongs to
pub fn number_of_cliques<N, E>(graph: &UnGraph<N, E>) -> NodeCounts {
    let mut counts: NodeCounts = graph.node_indices().map(|n| (n, 0)).collect();
    for clique in maximal_cliques(graph) {
        for node in clique {
            *counts.entry(node).or_insert(0) += 1;
        }
    }
    counts
}
