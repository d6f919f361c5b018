//! Graph algorithms module
//!
//! Algorithms live in the `attrgraph-algorithms` crate. This module is the
//! adapter layer: it projects the store into the shape each algorithm needs,
//! makes one call, and rekeys the result by `NodeId`.

use crate::graph::projection::{self, Projection};
use crate::graph::{GraphResult, GraphStore, NodeId};
use attrgraph_algorithms as algo;
use petgraph::graph::NodeIndex;
use petgraph::EdgeType;
use std::collections::HashMap;
use tracing::trace;

// Re-export algorithm types
pub use attrgraph_algorithms::{AlgorithmError, AlgorithmResult, PageRankConfig};

/// Value reported by `diameter` and `radius` when the measure is undefined
pub const UNDEFINED_DISTANCE: i64 = -1;

/// Map a provider result keyed by projection index back to node ids
fn rekey<Ty: EdgeType, E, T>(
    graph: &Projection<Ty, E>,
    values: HashMap<NodeIndex, T>,
) -> HashMap<NodeId, T> {
    values
        .into_iter()
        .filter_map(|(idx, value)| graph.node_weight(idx).map(|id| (id.clone(), value)))
        .collect()
}

/// Structural analytics over a graph
///
/// Each measure runs on either the directed projection (parallel edges and
/// self-loops kept) or the simple undirected projection (one edge per pair,
/// one loop per looped node).
pub trait GraphAlgorithms {
    fn node_connectivity(&self) -> usize;
    /// Pearson correlation of source out-degree and target in-degree over
    /// the edges; `None` when undefined
    fn degree_assortativity_coefficient(&self) -> Option<f64>;
    /// Number of triangles in the graph
    fn triangles(&self) -> usize;
    fn node_triangles(&self) -> HashMap<NodeId, usize>;
    fn transitivity(&self) -> f64;
    fn average_clustering(&self) -> f64;
    fn clustering(&self) -> HashMap<NodeId, f64>;
    fn square_clustering(&self) -> HashMap<NodeId, f64>;
    fn is_at_free(&self) -> bool;
    fn is_bipartite(&self) -> bool;
    fn has_bridges(&self) -> bool;
    fn is_chordal(&self) -> bool;
    fn is_biconnected(&self) -> bool;
    /// Number of maximal cliques
    fn graph_number_of_cliques(&self) -> usize;
    /// Number of maximal cliques each node belongs to
    fn number_of_cliques(&self) -> HashMap<NodeId, usize>;
    fn is_strongly_connected(&self) -> bool;
    fn number_strongly_connected_components(&self) -> usize;
    fn is_weakly_connected(&self) -> bool;
    fn number_weakly_connected_components(&self) -> usize;
    fn is_attracting_component(&self) -> bool;
    fn number_attracting_components(&self) -> usize;
    fn try_diameter(&self) -> AlgorithmResult<usize>;
    fn try_radius(&self) -> AlgorithmResult<usize>;
    fn is_eulerian(&self) -> bool;
    fn is_semieulerian(&self) -> bool;
    fn is_aperiodic(&self) -> bool;
    fn is_tree(&self) -> bool;
    fn is_forest(&self) -> bool;
    fn is_arborescence(&self) -> bool;
    fn is_branching(&self) -> bool;
    fn pagerank(&self) -> GraphResult<HashMap<NodeId, f64>>;
    fn degree_centrality(&self) -> HashMap<NodeId, f64>;
    fn closeness_centrality(&self) -> HashMap<NodeId, f64>;
    fn betweenness_centrality(&self) -> HashMap<NodeId, f64>;

    /// Longest shortest path, or [`UNDEFINED_DISTANCE`] when the graph is
    /// empty or not strongly connected
    fn diameter(&self) -> i64 {
        match self.try_diameter() {
            Ok(d) => d as i64,
            Err(e) => {
                trace!(error = %e, "diameter undefined");
                UNDEFINED_DISTANCE
            }
        }
    }

    /// Smallest eccentricity, or [`UNDEFINED_DISTANCE`] when the graph is
    /// empty or not strongly connected
    fn radius(&self) -> i64 {
        match self.try_radius() {
            Ok(r) => r as i64,
            Err(e) => {
                trace!(error = %e, "radius undefined");
                UNDEFINED_DISTANCE
            }
        }
    }
}

impl GraphAlgorithms for GraphStore {
    fn node_connectivity(&self) -> usize {
        algo::node_connectivity(&self.to_directed())
    }

    fn degree_assortativity_coefficient(&self) -> Option<f64> {
        algo::degree_assortativity_coefficient(&self.to_directed())
    }

    fn triangles(&self) -> usize {
        algo::count_triangles(&self.to_simple_undirected())
    }

    fn node_triangles(&self) -> HashMap<NodeId, usize> {
        let graph = self.to_simple_undirected();
        rekey(&graph, algo::triangles(&graph))
    }

    fn transitivity(&self) -> f64 {
        algo::transitivity(&self.to_simple_undirected())
    }

    fn average_clustering(&self) -> f64 {
        algo::average_clustering(&self.to_simple_undirected())
    }

    fn clustering(&self) -> HashMap<NodeId, f64> {
        let graph = self.to_simple_undirected();
        rekey(&graph, algo::clustering(&graph))
    }

    fn square_clustering(&self) -> HashMap<NodeId, f64> {
        let graph = self.to_directed();
        rekey(&graph, algo::square_clustering(&graph))
    }

    fn is_at_free(&self) -> bool {
        algo::is_at_free(&self.to_simple_undirected())
    }

    fn is_bipartite(&self) -> bool {
        algo::is_bipartite(&self.to_simple_undirected())
    }

    fn has_bridges(&self) -> bool {
        algo::has_bridges(&self.to_simple_undirected())
    }

    fn is_chordal(&self) -> bool {
        algo::is_chordal(&self.to_simple_undirected())
    }

    fn is_biconnected(&self) -> bool {
        algo::is_biconnected(&self.to_simple_undirected())
    }

    fn graph_number_of_cliques(&self) -> usize {
        algo::graph_number_of_cliques(&self.to_simple_undirected())
    }

    fn number_of_cliques(&self) -> HashMap<NodeId, usize> {
        let graph = self.to_simple_undirected();
        rekey(&graph, algo::number_of_cliques(&graph))
    }

    fn is_strongly_connected(&self) -> bool {
        algo::is_strongly_connected(&self.to_directed())
    }

    fn number_strongly_connected_components(&self) -> usize {
        algo::number_strongly_connected_components(&self.to_directed())
    }

    fn is_weakly_connected(&self) -> bool {
        algo::is_weakly_connected(&self.to_directed())
    }

    fn number_weakly_connected_components(&self) -> usize {
        algo::number_weakly_connected_components(&self.to_directed())
    }

    fn is_attracting_component(&self) -> bool {
        algo::is_attracting_component(&self.to_directed())
    }

    fn number_attracting_components(&self) -> usize {
        algo::number_attracting_components(&self.to_directed())
    }

    fn try_diameter(&self) -> AlgorithmResult<usize> {
        algo::diameter(&self.to_directed())
    }

    fn try_radius(&self) -> AlgorithmResult<usize> {
        algo::radius(&self.to_directed())
    }

    fn is_eulerian(&self) -> bool {
        algo::is_eulerian(&self.to_directed())
    }

    fn is_semieulerian(&self) -> bool {
        algo::is_semieulerian(&self.to_directed())
    }

    fn is_aperiodic(&self) -> bool {
        algo::is_aperiodic(&self.to_directed())
    }

    fn is_tree(&self) -> bool {
        algo::is_tree(&self.to_directed())
    }

    fn is_forest(&self) -> bool {
        algo::is_forest(&self.to_directed())
    }

    fn is_arborescence(&self) -> bool {
        algo::is_arborescence(&self.to_directed())
    }

    fn is_branching(&self) -> bool {
        algo::is_branching(&self.to_directed())
    }

    fn pagerank(&self) -> GraphResult<HashMap<NodeId, f64>> {
        let graph = self.to_simple_undirected();
        let scores = algo::page_rank(&graph, &self.config().pagerank)?;
        Ok(rekey(&graph, scores))
    }

    fn degree_centrality(&self) -> HashMap<NodeId, f64> {
        let graph = self.to_directed();
        rekey(&graph, algo::degree_centrality(&graph))
    }

    fn closeness_centrality(&self) -> HashMap<NodeId, f64> {
        let graph = self.to_directed();
        rekey(&graph, algo::closeness_centrality(&graph))
    }

    fn betweenness_centrality(&self) -> HashMap<NodeId, f64> {
        let graph = self.to_simple_undirected();
        rekey(&graph, algo::betweenness_centrality(&graph))
    }
}

impl GraphStore {
    /// Directed projection for the algorithms crate
    pub fn to_directed(&self) -> projection::DirectedProjection {
        projection::to_directed(self.multigraph())
    }

    /// Simple undirected projection for the algorithms crate
    pub fn to_simple_undirected(&self) -> projection::SimpleProjection {
        projection::to_simple_undirected(self.multigraph())
    }
}
