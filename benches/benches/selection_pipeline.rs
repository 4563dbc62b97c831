// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use lasso_region::Region;
use lasso_select::{PointStore, ScreenPoint, Snapshot};

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

fn gen_store(n: usize) -> PointStore {
    let mut rng = Rng::new(0x5CA7_7E12_0000_0001);
    PointStore::new((0..n).map(|i| {
        let cx = rng.next_f64() * 1200.0;
        let cy = rng.next_f64() * 800.0;
        ScreenPoint::new(format!("p{}", i), cx, cy, rng.next_f64(), cx, cy)
    }))
}

/// A wobbly closed loop around `center`, like a hand-drawn lasso.
fn lasso(center: Point, radius: f64, vertices: usize) -> Region {
    let mut rng = Rng::new(0x1A55_0000_0000_0002);
    Region::Polygon(
        (0..vertices)
            .map(|i| {
                let t = i as f64 / vertices as f64 * std::f64::consts::TAU;
                let r = radius * (0.8 + 0.4 * rng.next_f64());
                Point::new(center.x + r * t.cos(), center.y + r * t.sin())
            })
            .collect(),
    )
}

fn regions() -> Vec<(&'static str, Region)> {
    vec![
        (
            "rectangle",
            Region::Rectangle {
                corner1: Point::new(300.0, 200.0),
                corner2: Point::new(700.0, 500.0),
            },
        ),
        (
            "circle",
            Region::Circle {
                center: Point::new(600.0, 400.0),
                radius: 180.0,
            },
        ),
        ("lasso_64", lasso(Point::new(600.0, 400.0), 200.0, 64)),
        ("lasso_512", lasso(Point::new(600.0, 400.0), 200.0, 512)),
    ]
}

fn bench_select(c: &mut Criterion) {
    for &n in &[10_000usize, 100_000] {
        let mut group = c.benchmark_group(format!("select_n{}", n));
        let snapshot = Snapshot::new(1, gen_store(n), 50.0).expect("valid cell size");
        group.throughput(Throughput::Elements(n as u64));
        for (name, region) in regions() {
            group.bench_function(format!("{}_grid", name), |b| {
                b.iter(|| black_box(snapshot.select(&region).len()))
            });
            group.bench_function(format!("{}_exhaustive", name), |b| {
                b.iter(|| black_box(snapshot.select_exhaustive(&region).len()))
            });
        }
        group.finish();
    }
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &n in &[10_000usize, 100_000] {
        let store = gen_store(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("snapshot_n{}", n), |b| {
            b.iter(|| black_box(Snapshot::new(1, store.clone(), 50.0).map(|s| s.occupied_cells())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_rebuild);
criterion_main!(benches);
