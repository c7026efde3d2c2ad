//! Criterion benchmarks for the intersection oracle.
//! Focus: cost per call against graphs of growing edge count.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p meshgen --bench oracle_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use meshgen::api::{generate_mesh, scatter_centers, segment_intersects_any, ReplayToken, ScatterCfg};
use meshgen::geom2::PROXIMITY_EPS;

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");
    for &count in &[1usize, 3, 6, 10] {
        let cfg = ScatterCfg {
            count,
            radius: 0.06,
            gap: 0.02,
            max_attempts: 5000,
        };
        let centers = scatter_centers(cfg, ReplayToken { seed: 43, index: 0 }).unwrap();
        let mesh = generate_mesh(&centers, 0.06, 8).unwrap();
        let g = &mesh.graph;
        // Corner 0 to the last obstacle vertex: usually blocked late or clear.
        let far = g.num_points() - 1;
        group.bench_with_input(
            BenchmarkId::new("segment_intersects_any", g.num_edges()),
            &far,
            |b, &far| {
                b.iter(|| segment_intersects_any(g, 0, far, PROXIMITY_EPS));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_oracle);
criterion_main!(benches);
