//! Structural graph measures over `petgraph` graphs.
//!
//! Every function takes a `petgraph::Graph` (directed or undirected) and
//! reports its result keyed by `NodeIndex`. Callers own the projection from
//! their storage into these graphs.

pub mod assortativity;
pub mod centrality;
pub mod classify;
pub mod clique;
pub mod clustering;
pub mod common;
pub mod connectivity;
pub mod distance;
pub mod pagerank;
pub mod structure;

pub use assortativity::degree_assortativity_coefficient;
pub use centrality::{betweenness_centrality, closeness_centrality, degree_centrality};
pub use classify::{has_bridges, is_at_free, is_biconnected, is_bipartite, is_chordal};
pub use clique::{graph_number_of_cliques, maximal_cliques, number_of_cliques};
pub use clustering::{
    average_clustering, clustering, count_triangles, square_clustering, transitivity, triangles,
};
pub use common::{AlgorithmError, AlgorithmResult, NodeCounts, NodeScores};
pub use connectivity::{
    attracting_components, is_attracting_component, is_strongly_connected, is_weakly_connected,
    node_connectivity, number_attracting_components, number_strongly_connected_components,
    number_weakly_connected_components,
};
pub use distance::{diameter, eccentricity, radius};
pub use pagerank::{page_rank, PageRankConfig};
pub use structure::{
    has_eulerian_path, is_aperiodic, is_arborescence, is_branching, is_eulerian, is_forest,
    is_semieulerian, is_tree,
};
