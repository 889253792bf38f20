use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tether::{component_count, dfs, Bfs, Graph, VertexHandle};

fn chain(size: usize) -> (Graph<usize, ()>, Vec<VertexHandle>) {
    let mut graph: Graph<usize, ()> = Graph::with_capacity(size);
    let nodes: Vec<_> = (0..size).map(|i| graph.add_vertex(i)).collect();
    // Chain: 0-1-...-N
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1], ()).unwrap();
    }
    (graph, nodes)
}

fn tree(size: usize) -> (Graph<usize, ()>, Vec<VertexHandle>) {
    let mut graph: Graph<usize, ()> = Graph::with_capacity(size);
    let nodes: Vec<_> = (0..size).map(|i| graph.add_vertex(i)).collect();
    for i in 1..size {
        graph.add_edge(nodes[i / 2], nodes[i], ()).unwrap();
    }
    (graph, nodes)
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_build_chain", |b| {
        b.iter(|| black_box(chain(size)));
    });
}

fn bench_graph_sparse_remove(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_sparse_remove_middle", |b| {
        b.iter_batched(
            || chain(size),
            |(mut graph, nodes)| black_box(graph.remove_vertex(nodes[size / 2])),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("graph_remove_edge", |b| {
        b.iter_batched(
            || {
                let (mut graph, nodes) = chain(size);
                let e = graph.add_edge(nodes[0], nodes[size - 1], ()).unwrap();
                (graph, e)
            },
            |(mut graph, e)| black_box(graph.remove_edge(e)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let size = 1000;
    let (graph, nodes) = tree(size);

    c.bench_function("graph_dfs", |b| {
        b.iter(|| black_box(dfs(&graph, nodes[0])));
    });

    c.bench_function("graph_bfs", |b| {
        b.iter(|| black_box(Bfs::new(&graph, nodes[0]).map(Iterator::count)));
    });

    c.bench_function("graph_component_count", |b| {
        b.iter(|| black_box(component_count(&graph)));
    });

    let mut edgeless: Graph<usize, ()> = Graph::with_capacity(size * 100);
    for i in 0..size * 100 {
        edgeless.add_vertex(i);
    }
    c.bench_function("graph_component_count_edgeless", |b| {
        b.iter(|| black_box(component_count(&edgeless)));
    });
}

criterion_group!(benches, bench_graph_build, bench_graph_sparse_remove, bench_graph_traversal);
criterion_main!(benches);
