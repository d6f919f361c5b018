//! Lazy breadth-first and depth-first tree-edge iterators
//!
//! Both follow out-edges from a root and yield each discovery step once,
//! with parallel edges and back edges ignored.

use super::edge::TreeEdge;
use super::multigraph::MultiDiGraph;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

fn successors(graph: &MultiDiGraph, node: NodeIndex) -> Vec<NodeIndex> {
    let mut next: Vec<NodeIndex> = graph
        .graph()
        .neighbors_directed(node, Direction::Outgoing)
        .collect();
    // petgraph walks adjacency newest-first; visit in insertion order instead
    next.reverse();
    next
}

fn tree_edge(graph: &MultiDiGraph, source: NodeIndex, target: NodeIndex) -> Option<TreeEdge> {
    Some(TreeEdge {
        source: graph.node_record(graph.id_at(source)?)?,
        target: graph.node_record(graph.id_at(target)?)?,
    })
}

/// Breadth-first tree edges
pub struct BfsEdges<'a> {
    graph: &'a MultiDiGraph,
    queue: VecDeque<NodeIndex>,
    pending: VecDeque<(NodeIndex, NodeIndex)>,
    discovered: FxHashSet<NodeIndex>,
}

impl<'a> BfsEdges<'a> {
    pub(crate) fn new(graph: &'a MultiDiGraph, root: NodeIndex) -> Self {
        let mut discovered = FxHashSet::default();
        discovered.insert(root);
        BfsEdges {
            graph,
            queue: VecDeque::from([root]),
            pending: VecDeque::new(),
            discovered,
        }
    }
}

impl Iterator for BfsEdges<'_> {
    type Item = TreeEdge;

    fn next(&mut self) -> Option<TreeEdge> {
        loop {
            if let Some((u, v)) = self.pending.pop_front() {
                if let Some(edge) = tree_edge(self.graph, u, v) {
                    return Some(edge);
                }
                continue;
            }
            let u = self.queue.pop_front()?;
            for v in successors(self.graph, u) {
                if self.discovered.insert(v) {
                    self.pending.push_back((u, v));
                    self.queue.push_back(v);
                }
            }
        }
    }
}

/// Depth-first tree edges
pub struct DfsEdges<'a> {
    graph: &'a MultiDiGraph,
    // Each frame holds a node and its not yet examined successors, reversed
    stack: Vec<(NodeIndex, Vec<NodeIndex>)>,
    visited: FxHashSet<NodeIndex>,
}

impl<'a> DfsEdges<'a> {
    pub(crate) fn new(graph: &'a MultiDiGraph, root: NodeIndex) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(root);
        let mut frame = successors(graph, root);
        frame.reverse();
        DfsEdges {
            graph,
            stack: vec![(root, frame)],
            visited,
        }
    }
}

impl Iterator for DfsEdges<'_> {
    type Item = TreeEdge;

    fn next(&mut self) -> Option<TreeEdge> {
        loop {
            let (u, rest) = self.stack.last_mut()?;
            let u = *u;
            match rest.pop() {
                Some(v) => {
                    if !self.visited.insert(v) {
                        continue;
                    }
                    let mut frame = successors(self.graph, v);
                    frame.reverse();
                    self.stack.push((v, frame));
                    if let Some(edge) = tree_edge(self.graph, u, v) {
                        return Some(edge);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
