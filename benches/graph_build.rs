use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphtheory::{DirectedGraph, UndirectedGraph, Vertex};

fn labels(n: usize) -> Vec<Vertex> {
    (0..n).map(|i| Vertex::new(format!("v{}", i))).collect()
}

fn bench_complete(c: &mut Criterion) {
    let vertices = labels(64);

    c.bench_function("complete_undirected_64", |b| {
        b.iter(|| UndirectedGraph::complete(black_box(vertices.clone())).unwrap())
    });
    c.bench_function("complete_directed_64", |b| {
        b.iter(|| DirectedGraph::complete(black_box(vertices.clone())).unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let graph = UndirectedGraph::complete(labels(64)).unwrap();

    c.bench_function("edge_by_labels", |b| {
        b.iter(|| graph.edge_by_labels(black_box("v63"), black_box("v62")))
    });
    c.bench_function("adjacent_vertices_by_label", |b| {
        b.iter(|| graph.adjacent_vertices_by_label(black_box("v10")).unwrap())
    });
}

criterion_group!(benches, bench_complete, bench_lookup);
criterion_main!(benches);
