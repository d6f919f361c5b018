use attrgraph::graph::{Edge, EdgeKey, GraphError, GraphStore, Label, Node, NodeId, PropertyValue};
use attrgraph::{DanglingEdgePolicy, GraphAlgorithms, GraphConfig, LABELS_KEY};
use std::collections::HashSet;

fn person(id: &str, name: &str) -> Node {
    let mut node = Node::new(id, "Person");
    node.set_property("name", name);
    node
}

fn knows(s: &str, t: &str) -> Edge {
    Edge::between(s, t, "knows")
}

/// A -knows-> B -knows-> C
fn chain() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(person("A", "Alice")).unwrap();
    store.add_node(person("B", "Bob")).unwrap();
    store.add_node(person("C", "Carol")).unwrap();
    store.add_edge(knows("A", "B")).unwrap();
    store.add_edge(knows("B", "C")).unwrap();
    store
}

#[test]
fn test_round_trip_node_record() {
    let mut store = GraphStore::new();
    let mut node = Node::new_with_labels("A", vec![Label::new("Person"), Label::new("Author")]);
    node.set_property("name", "Alice");
    node.set_property("age", 30i64);
    node.set_property("score", 4.5);
    node.set_property("active", true);
    store.add_node(node.clone()).unwrap();

    let fetched = store.get_node("A").unwrap();
    assert_eq!(fetched.labels, node.labels);
    assert_eq!(fetched.properties, node.properties);
    assert!(!fetched.has_property(LABELS_KEY));
}

#[test]
fn test_chain_scenario() {
    let store = chain();
    assert_eq!(store.degree("B").unwrap(), 2);
    // C reaches nothing, so distances are undefined
    assert_eq!(store.diameter(), -1);
    assert_eq!(store.radius(), -1);
}

#[test]
fn test_has_edge_follows_add_and_remove() {
    let mut store = chain();
    let edge = knows("A", "B");
    assert!(store.has_edge(&edge));
    store.remove_edge(&edge).unwrap();
    assert!(!store.has_edge(&edge));
}

#[test]
fn test_parallel_edges_of_distinct_kinds() {
    let mut store = chain();
    store.add_edge(Edge::between("A", "B", "likes")).unwrap();
    assert_eq!(store.edge_count(), 3);

    store.remove_edge(&Edge::between("A", "B", "likes")).unwrap();
    assert!(store.has_edge(&knows("A", "B")));
    assert_eq!(store.edge_count(), 2);
}

#[test]
fn test_placeholder_endpoint() {
    let mut store = GraphStore::new();
    store.add_node(person("A", "Alice")).unwrap();
    store.add_edge(knows("A", "B")).unwrap();

    let b = store.get_node("B").unwrap();
    assert!(b.labels.is_empty());
    assert!(b.properties.is_empty());
}

#[test]
fn test_reject_policy() {
    let config = GraphConfig::default().with_dangling_edges(DanglingEdgePolicy::Reject);
    let mut store = GraphStore::with_config(config);
    store.add_node(person("A", "Alice")).unwrap();

    let result = store.add_edge(knows("A", "B"));
    assert_eq!(result, Err(GraphError::DanglingEndpoint(NodeId::new("B"))));
    assert!(!store.has_node("B"));
}

#[test]
fn test_edge_count_equals_sum_of_out_edges() {
    let mut store = chain();
    store.add_edge(Edge::between("C", "A", "knows")).unwrap();
    store.add_edge(Edge::between("A", "A", "self")).unwrap();
    store.add_edge(Edge::between("A", "B", "likes")).unwrap();

    let total: usize = store
        .get_nodes()
        .iter()
        .map(|n| store.out_edges(n).unwrap().count())
        .sum();
    assert_eq!(store.edges().count(), total);
    assert_eq!(store.edge_count(), total);
}

#[test]
fn test_views_are_stable_without_mutation() {
    let store = chain();
    let nodes_a: HashSet<Node> = store.nodes().collect();
    let nodes_b: HashSet<Node> = store.nodes().collect();
    assert_eq!(nodes_a, nodes_b);

    let edges_a: HashSet<Edge> = store.edges().collect();
    let edges_b: HashSet<Edge> = store.edges().collect();
    assert_eq!(edges_a, edges_b);
}

#[test]
fn test_node_edges_cover_both_directions() {
    let store = chain();
    let edges: HashSet<EdgeKey> = store.node_edges("B").unwrap().map(|e| e.key()).collect();
    let expected: HashSet<EdgeKey> = [EdgeKey::new("A", "B", "knows"), EdgeKey::new("B", "C", "knows")]
        .into_iter()
        .collect();
    assert_eq!(edges, expected);
}

#[test]
fn test_merge_invariant() {
    // X and Y fold into S; E1 and E2 are external
    let mut store = GraphStore::new();
    for id in ["S", "X", "Y", "E1", "E2"] {
        store.add_node(Node::new(id, "Thing")).unwrap();
    }
    store.add_edge(knows("E1", "X")).unwrap();
    store.add_edge(knows("Y", "E2")).unwrap();
    store.add_edge(knows("X", "Y")).unwrap();
    store.add_edge(knows("X", "S")).unwrap();
    store.add_edge(knows("S", "Y")).unwrap();
    store.add_edge(Edge::between("Y", "Y", "loop")).unwrap();

    let moved = store.merge_nodes("S", ["X", "Y"]).unwrap();
    assert_eq!(moved, 2);

    assert!(!store.has_node("X"));
    assert!(!store.has_node("Y"));
    assert!(store.contains_edge(&EdgeKey::new("E1", "S", "knows")));
    assert!(store.contains_edge(&EdgeKey::new("S", "E2", "knows")));
    assert_eq!(store.edge_count(), 2);
    assert!(store.edges().all(|e| !e.is_self_loop()));
}

#[test]
fn test_merge_accepts_node_records() {
    let mut store = chain();
    let c = store.get_node("C").unwrap();
    let a = store.get_node("A").unwrap();
    store.merge_nodes(&a, vec![c]).unwrap();
    assert!(store.contains_edge(&EdgeKey::new("B", "A", "knows")));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_find_nodes_by_value() {
    let mut store = chain();
    store.add_node(person("D", "Bob")).unwrap();

    let found: HashSet<NodeId> = store
        .find_nodes_by_value(&PropertyValue::from("Bob"))
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(found.len(), 2);
    assert!(found.contains(&NodeId::new("D")));

    assert!(matches!(
        store.find_nodes_by_value(&PropertyValue::Boolean(false)),
        Err(GraphError::NoMatchingNode(_))
    ));
}

#[test]
fn test_traversal_order() {
    let mut store = chain();
    store.add_edge(knows("A", "C")).unwrap();

    let bfs: Vec<(String, String)> = store
        .bfs("A")
        .unwrap()
        .map(|e| (e.source.id.to_string(), e.target.id.to_string()))
        .collect();
    assert_eq!(
        bfs,
        vec![
            ("A".to_string(), "B".to_string()),
            ("A".to_string(), "C".to_string())
        ]
    );

    let dfs: Vec<(String, String)> = store
        .dfs("A")
        .unwrap()
        .map(|e| (e.source.id.to_string(), e.target.id.to_string()))
        .collect();
    assert_eq!(
        dfs,
        vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string())
        ]
    );
}

#[test]
fn test_generated_ids() {
    let mut store = GraphStore::new();
    let node = Node::generated(vec![Label::new("Person")], Default::default());
    let id = node.id.clone();
    store.add_node(node).unwrap();
    assert!(store.has_node(&id));
    assert_eq!(id.as_str().len(), 36);
}
