//! Benchmarks for the spanning tree solvers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use spanning::{minimum_spanning_tree, Algorithm, IntegerWeightOperations, UndirectedGraph};

type Edge = (usize, i64);

/// Connected graph: a random spanning path plus `extra` random chords.
fn random_graph(n: u32, extra: usize, seed: u64) -> UndirectedGraph<u32, Edge> {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let mut g = UndirectedGraph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    let mut id = 0;
    for v in 1..n {
        let w = next(1000) as i64;
        g.add_edge(&(v - 1), (id, w), &v).unwrap();
        id += 1;
    }
    while id < (n as usize - 1) + extra {
        let h = next(n as u64) as u32;
        let t = next(n as u64) as u32;
        if h != t {
            let w = next(1000) as i64;
            g.add_edge(&h, (id, w), &t).unwrap();
            id += 1;
        }
    }
    g
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");
    for &(n, extra) in &[(100, 400), (1000, 4000)] {
        let g = random_graph(n, extra, 42);
        for &algorithm in Algorithm::all() {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &g, |b, g| {
                b.iter(|| {
                    let tree = minimum_spanning_tree(g)
                        .unwrap()
                        .where_edges_have_weights(|e: &Edge| e.1)
                        .unwrap()
                        .applying(algorithm, IntegerWeightOperations)
                        .unwrap();
                    black_box(tree)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
