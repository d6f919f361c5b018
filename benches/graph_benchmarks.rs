use attrgraph::graph::{Edge, GraphStore, Node};
use attrgraph::GraphAlgorithms;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Ring of `size` people, each also knowing the person two steps ahead
fn build_store(size: usize) -> GraphStore {
    let mut store = GraphStore::new();
    for i in 0..size {
        let mut node = Node::new(format!("http://ex.org/Person{}", i), "Person");
        node.set_property("name", format!("Person{}", i));
        node.set_property("age", (i % 100) as i64);
        store.add_node(node).unwrap();
    }
    for i in 0..size {
        let source = format!("http://ex.org/Person{}", i);
        store
            .add_edge(Edge::between(
                source.clone(),
                format!("http://ex.org/Person{}", (i + 1) % size),
                "knows",
            ))
            .unwrap();
        store
            .add_edge(Edge::between(
                source,
                format!("http://ex.org/Person{}", (i + 2) % size),
                "follows",
            ))
            .unwrap();
    }
    store
}

/// Benchmark node and edge insertion throughput
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| build_store(size));
        });
    }
    group.finish();
}

/// Benchmark full edge iteration with endpoint reconstruction
fn bench_edge_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_scan");

    for size in [100, 1000, 10_000].iter() {
        let store = build_store(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| store.edges().count());
        });
    }
    group.finish();
}

/// Benchmark merging a batch of nodes into one
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_nodes");

    for size in [100, 1000].iter() {
        let store = build_store(*size);
        let folded: Vec<String> = (1..10).map(|i| format!("http://ex.org/Person{}", i)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| {
                let mut store = store.clone();
                store.merge_nodes("http://ex.org/Person0", &folded).unwrap()
            });
        });
    }
    group.finish();
}

/// Benchmark delegated analytics including projection cost
fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    group.sample_size(20);

    let store = build_store(1000);
    group.bench_function("pagerank", |b| b.iter(|| store.pagerank().unwrap()));
    group.bench_function("transitivity", |b| b.iter(|| store.transitivity()));
    group.bench_function("scc", |b| {
        b.iter(|| store.number_strongly_connected_components())
    });
    group.bench_function("betweenness", |b| b.iter(|| store.betweenness_centrality()));
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_edge_scan, bench_merge, bench_algorithms);
criterion_main!(benches);
