//! Sorting and traversal benchmarks over random inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortgraph::{Graph, SortAlgorithm};

const SEED: u64 = 0x5eed;

fn random_keys(len: usize, range: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.gen_range(-range..range)).collect()
}

fn random_graph(vertices: usize, edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(SEED);
    let labels: Vec<String> = (0..vertices).map(|i| format!("v{i}")).collect();
    (0..edges)
        .map(|_| {
            let a = rng.gen_range(0..vertices);
            let b = rng.gen_range(0..vertices);
            (labels[a].as_str(), labels[b].as_str())
        })
        .collect()
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for len in [100_usize, 1_000] {
        let input = random_keys(len, 10_000);
        for algorithm in SortAlgorithm::ALL {
            // 二次复杂度算法只跑小规模
            if len > 100 && matches!(algorithm, SortAlgorithm::Bubble | SortAlgorithm::Selection) {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &input, |b, input| {
                b.iter(|| black_box(algorithm.sort(black_box(input))));
            });
        }
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let graph = random_graph(2_000, 8_000);
    let start = "v0";

    c.bench_function("bfs_2000v", |b| b.iter(|| black_box(graph.bfs(black_box(start)))));
    c.bench_function("dfs_iterative_2000v", |b| {
        b.iter(|| black_box(graph.dfs_iterative(black_box(start))))
    });
}

criterion_group!(benches, bench_sorting, bench_traversal);
criterion_main!(benches);
