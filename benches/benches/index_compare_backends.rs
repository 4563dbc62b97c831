// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lasso_index::{Aabb2D, GridIndex, Index};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize, max_w: f64, max_h: f64) -> Vec<(f64, f64, u32)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| (rng.next_f64() * max_w, rng.next_f64() * max_h, i as u32))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<(f64, f64, u32)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push((cx + dx, cy + dy, out.len() as u32));
        }
    }
    out
}

fn gen_banded_points(n_bands: usize, per_band: usize, band_height: f64, width: f64) -> Vec<(f64, f64, u32)> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut out = Vec::with_capacity(n_bands * per_band);
    for b in 0..n_bands {
        let y0 = b as f64 * band_height * 2.0;
        for _ in 0..per_band {
            let x = rng.next_f64() * width;
            let y = y0 + rng.next_f64() * band_height;
            out.push((x, y, out.len() as u32));
        }
    }
    out
}

fn bench_flatvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatvec");
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = gen_uniform_points(n, 2000.0, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_query_n{}", n), |b| {
            b.iter_batched(
                Index::<f64, u32>::new,
                |mut idx| {
                    idx.build(pts.iter().copied());
                    let hits: usize = idx
                        .query_rect(Aabb2D::<f64>::from_xywh(800.0, 800.0, 400.0, 400.0))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = gen_uniform_points(n, 2000.0, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_query_n{}", n), |b| {
            b.iter_batched(
                || Index::<f64, u32>::with_uniform_grid(50.0),
                |mut idx| {
                    idx.build(pts.iter().copied());
                    let hits: usize = idx
                        .query_rect(Aabb2D::<f64>::from_xywh(800.0, 800.0, 400.0, 400.0))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy_n100000");
    let pts = gen_uniform_points(100_000, 2000.0, 2000.0);
    let queries: Vec<Aabb2D<f64>> = {
        let mut rng = Rng::new(0x0DDB_A11_5EED_0001);
        (0..64)
            .map(|_| {
                let w = 20.0 + rng.next_f64() * 400.0;
                let h = 20.0 + rng.next_f64() * 400.0;
                Aabb2D::<f64>::from_xywh(rng.next_f64() * 1600.0, rng.next_f64() * 1600.0, w, h)
            })
            .collect()
    };
    let mut flat: Index<f64, u32> = Index::new();
    flat.build(pts.iter().copied());
    group.bench_function("flatvec", |b| {
        b.iter(|| {
            let hits: usize = queries.iter().map(|q| flat.query_rect(*q).count()).sum();
            black_box(hits);
        })
    });
    for &cell in &[10.0_f64, 50.0, 200.0] {
        let mut grid: GridIndex<u32> = Index::<f64, u32>::with_uniform_grid(cell);
        grid.build(pts.iter().copied());
        group.bench_function(format!("grid_cell{}", cell), |b| {
            b.iter(|| {
                let hits: usize = queries
                    .iter()
                    .map(|q| {
                        grid.query_rect(*q)
                            .filter(|e| q.contains_point(e.x, e.y))
                            .count()
                    })
                    .sum();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_grid_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_clustered");
    let pts = gen_clustered_points(32, 1_000, 80.0);
    group.throughput(Throughput::Elements(pts.len() as u64));
    group.bench_function("build_query", |b| {
        b.iter_batched(
            || Index::<f64, u32>::with_uniform_grid(50.0),
            |mut idx| {
                idx.build(pts.iter().copied());
                let hits: usize = idx
                    .query_rect(Aabb2D::<f64>::from_xywh(500.0, 500.0, 1000.0, 1000.0))
                    .count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_grid_banded(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_banded");
    let pts = gen_banded_points(16, 2_000, 20.0, 2000.0);
    group.throughput(Throughput::Elements(pts.len() as u64));
    group.bench_function("build_query", |b| {
        b.iter_batched(
            || Index::<f64, u32>::with_uniform_grid(50.0),
            |mut idx| {
                idx.build(pts.iter().copied());
                let hits: usize = idx
                    .query_rect(Aabb2D::<f64>::from_xywh(0.0, 100.0, 2000.0, 300.0))
                    .count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_flatvec,
    bench_grid,
    bench_query_heavy,
    bench_grid_clustered,
    bench_grid_banded,
);
criterion_main!(benches);
