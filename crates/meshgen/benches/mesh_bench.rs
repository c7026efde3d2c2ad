//! Criterion benchmarks for full mesh construction.
//! Focus sizes: obstacles in {1, 3, 6, 10}, vertices per obstacle in {6, 12}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use meshgen::api::{build_mesh, scatter_centers, MeshCfg, RegularPolygonCfg, ReplayToken, ScatterCfg};

fn bench_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh");
    group.sample_size(20);
    for &vertex_count in &[6u8, 12] {
        for &count in &[1usize, 3, 6, 10] {
            let scatter = ScatterCfg {
                count,
                radius: 0.06,
                gap: 0.02,
                max_attempts: 5000,
            };
            let poly = RegularPolygonCfg {
                radius: 0.06,
                vertex_count,
            };
            group.bench_with_input(
                BenchmarkId::new(format!("build_mesh/k{vertex_count}"), count),
                &count,
                |b, _| {
                    b.iter_batched(
                        || scatter_centers(scatter, ReplayToken { seed: 44, index: 0 }).unwrap(),
                        |centers| {
                            let _mesh = build_mesh(&centers, &poly, MeshCfg::default()).unwrap();
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_mesh);
criterion_main!(benches);
