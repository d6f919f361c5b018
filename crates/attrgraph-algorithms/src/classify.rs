//! Classification of undirected graphs
//!
//! Bipartiteness, chordality, asteroidal-triple freeness, biconnectivity and
//! bridges. Bipartiteness sees self-loops (a loop is an odd cycle); the other
//! predicates work on the loop-free simple graph. Bridges, articulation
//! points and two-coloring come from `rustworkx_core`.

use super::common::{loopless, neighbor_sets};
use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use rustworkx_core::coloring::two_color;
use rustworkx_core::connectivity;
use std::collections::{HashSet, VecDeque};

/// Two-colorable. The empty graph is bipartite; a self-loop is not.
pub fn is_bipartite<N, E>(graph: &UnGraph<N, E>) -> bool {
    two_color(graph).is_some()
}

/// Every cycle of length four or more has a chord. Self-loops are ignored.
///
/// Maximum cardinality search yields a perfect elimination ordering exactly
/// when the graph is chordal; each node's earlier-visited neighbors must
/// form a clique.
pub fn is_chordal<N, E>(graph: &UnGraph<N, E>) -> bool {
    let adj = neighbor_sets(graph);
    let n = adj.len();

    let mut weight = vec![0usize; n];
    let mut position: Vec<Option<usize>> = vec![None; n];
    let mut order = Vec::with_capacity(n);

    for step in 0..n {
        let Some(v) = (0..n)
            .filter(|&v| position[v].is_none())
            .max_by_key(|&v| weight[v])
        else {
            break;
        };
        position[v] = Some(step);
        order.push(v);
        for &w in &adj[v] {
            if position[w].is_none() {
                weight[w] += 1;
            }
        }
    }

    for &v in &order {
        let earlier: Vec<usize> = adj[v]
            .iter()
            .copied()
            .filter(|&w| position[w] < position[v])
            .collect();
        for (i, &a) in earlier.iter().enumerate() {
            for &b in &earlier[i + 1..] {
                if !adj[a].contains(&b) {
                    return false;
                }
            }
        }
    }

    true
}

/// Free of asteroidal triples: no three pairwise non-adjacent nodes where
/// each pair is joined by a path avoiding the closed neighborhood of the
/// third.
pub fn is_at_free<N, E>(graph: &UnGraph<N, E>) -> bool {
    let adj = neighbor_sets(graph);
    let n = adj.len();
    if n < 3 {
        return true;
    }

    let components: Vec<Vec<Option<usize>>> =
        (0..n).map(|w| components_avoiding(&adj, w)).collect();
    let together = |avoid: usize, a: usize, b: usize| {
        components[avoid][a].is_some() && components[avoid][a] == components[avoid][b]
    };

    for u in 0..n {
        for v in (u + 1)..n {
            if adj[u].contains(&v) {
                continue;
            }
            for w in (v + 1)..n {
                if adj[u].contains(&w) || adj[v].contains(&w) {
                    continue;
                }
                if together(w, u, v) && together(u, v, w) && together(v, u, w) {
                    return false;
                }
            }
        }
    }

    true
}

/// Component labels of the graph with the closed neighborhood of `avoid` removed
fn components_avoiding(adj: &[HashSet<usize>], avoid: usize) -> Vec<Option<usize>> {
    let n = adj.len();
    let mut label: Vec<Option<usize>> = vec![None; n];
    let mut blocked = vec![false; n];
    blocked[avoid] = true;
    for &w in &adj[avoid] {
        blocked[w] = true;
    }

    let mut next_label = 0;
    for start in 0..n {
        if blocked[start] || label[start].is_some() {
            continue;
        }
        label[start] = Some(next_label);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &w in &adj[u] {
                if !blocked[w] && label[w].is_none() {
                    label[w] = Some(next_label);
                    queue.push_back(w);
                }
            }
        }
        next_label += 1;
    }

    label
}

/// Connected, at least two nodes, and no articulation point.
/// Self-loops play no part.
pub fn is_biconnected<N, E>(graph: &UnGraph<N, E>) -> bool {
    let simple = loopless(graph);
    simple.node_count() >= 2
        && connected_components(&simple) == 1
        && connectivity::articulation_points(&simple, None).is_empty()
}

/// Has at least one edge whose removal disconnects its component.
/// A self-loop is never a bridge.
pub fn has_bridges<N, E>(graph: &UnGraph<N, E>) -> bool {
    !connectivity::bridges(&loopless(graph)).is_empty()
}
