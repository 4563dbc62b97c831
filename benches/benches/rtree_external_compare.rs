// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lasso_index::{Aabb2D, Index};

use rstar::{AABB, RTree};

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

fn gen_points(count: usize) -> Vec<(f64, f64, u32)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| (rng.next_f64() * 2000.0, rng.next_f64() * 2000.0, i as u32))
        .collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_f64");
    for &n in &[10_000usize, 100_000] {
        let pts = gen_points(n);
        let query = Aabb2D::<f64>::from_xywh(800.0, 800.0, 400.0, 400.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("grid_build_query_n{}", n), |b| {
            b.iter_batched(
                || Index::<f64, u32>::with_uniform_grid(50.0),
                |mut idx| {
                    idx.build(pts.iter().copied());
                    let hits: usize = idx
                        .query_rect(query)
                        .filter(|e| query.contains_point(e.x, e.y))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || pts.iter().map(|&(x, y, _)| [x, y]).collect::<Vec<_>>(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let aabb = AABB::from_corners(
                        [query.min_x, query.min_y],
                        [query.max_x, query.max_y],
                    );
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
