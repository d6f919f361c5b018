//! Structural classification of directed graphs
//!
//! Trees, forests, arborescences and branchings are judged on the underlying
//! undirected multigraph (parallel edges count). Eulerian tests follow the
//! directed degree-balance conditions. Every predicate is false on an empty
//! graph.

use super::common::{adjacency, in_out_degrees};
use super::connectivity::{is_strongly_connected, is_weakly_connected};
use petgraph::algo::connected_components;
use petgraph::graph::DiGraph;
use petgraph::Direction;
use std::collections::HashMap;

/// Connected with exactly `n - 1` edges
pub fn is_tree<N, E>(graph: &DiGraph<N, E>) -> bool {
    let n = graph.node_count();
    n > 0 && graph.edge_count() == n - 1 && connected_components(graph) == 1
}

/// Every weakly connected component is a tree
pub fn is_forest<N, E>(graph: &DiGraph<N, E>) -> bool {
    let n = graph.node_count();
    // Each component has at least (size - 1) edges, so equality holds only
    // when every component is a tree.
    n > 0 && graph.edge_count() + connected_components(graph) == n
}

/// A tree where every node has in-degree at most one
pub fn is_arborescence<N, E>(graph: &DiGraph<N, E>) -> bool {
    is_tree(graph) && max_in_degree(graph) <= 1
}

/// A forest where every node has in-degree at most one
pub fn is_branching<N, E>(graph: &DiGraph<N, E>) -> bool {
    is_forest(graph) && max_in_degree(graph) <= 1
}

fn max_in_degree<N, E>(graph: &DiGraph<N, E>) -> usize {
    let (in_degree, _) = in_out_degrees(graph);
    in_degree.into_iter().max().unwrap_or(0)
}

/// Has a closed walk using every edge exactly once
pub fn is_eulerian<N, E>(graph: &DiGraph<N, E>) -> bool {
    let (in_degree, out_degree) = in_out_degrees(graph);
    in_degree == out_degree && is_strongly_connected(graph)
}

/// Has a walk (closed or not) using every edge exactly once
pub fn has_eulerian_path<N, E>(graph: &DiGraph<N, E>) -> bool {
    if is_eulerian(graph) {
        return true;
    }

    let (in_degree, out_degree) = in_out_degrees(graph);
    let mut unbalanced_in = 0;
    let mut unbalanced_out = 0;

    for (&ins, &outs) in in_degree.iter().zip(&out_degree) {
        if ins == outs + 1 {
            unbalanced_in += 1;
        } else if outs == ins + 1 {
            unbalanced_out += 1;
        } else if ins != outs {
            return false;
        }
    }

    unbalanced_in <= 1 && unbalanced_out <= 1 && is_weakly_connected(graph)
}

/// Has an Eulerian path but no Eulerian circuit
pub fn is_semieulerian<N, E>(graph: &DiGraph<N, E>) -> bool {
    has_eulerian_path(graph) && !is_eulerian(graph)
}

/// Whether the greatest common divisor of all cycle lengths is 1.
///
/// A breadth-first level assignment from an arbitrary node gives the gcd of
/// `level(u) - level(v) + 1` over non-tree edges. Nodes not reached are
/// examined the same way on the remaining subgraph.
pub fn is_aperiodic<N, E>(graph: &DiGraph<N, E>) -> bool {
    let n = graph.node_count();
    if n == 0 {
        return false;
    }

    let successors = adjacency(graph, Direction::Outgoing);
    let mut remaining = vec![true; n];
    let mut left = n;

    while let Some(start) = remaining.iter().position(|&r| r) {
        let mut levels: HashMap<usize, i64> = HashMap::new();
        levels.insert(start, 0);
        let mut this_level = vec![start];
        let mut period: i64 = 0;
        let mut depth: i64 = 1;

        while !this_level.is_empty() {
            let mut next_level = Vec::new();
            for &u in &this_level {
                let level_u = levels.get(&u).copied().unwrap_or(0);
                for &v in &successors[u] {
                    if !remaining[v] {
                        continue;
                    }
                    match levels.get(&v) {
                        Some(&level_v) => period = gcd(period, level_u - level_v + 1),
                        None => {
                            levels.insert(v, depth);
                            next_level.push(v);
                        }
                    }
                }
            }
            this_level = next_level;
            depth += 1;
        }

        if period != 1 {
            return false;
        }
        left -= levels.len();
        if left == 0 {
            return true;
        }
        for &reached in levels.keys() {
            remaining[reached] = false;
        }
    }

    true
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
