// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Lasso Index: build a grid over points and query candidates.

use lasso_index::{Aabb2D, GridIndex, Index};

fn main() {
    let mut idx: GridIndex<u32> = Index::<f64, u32>::with_uniform_grid(50.0);
    idx.build([(10.0, 10.0, 1), (45.0, 20.0, 2), (260.0, 120.0, 3)]);
    println!("index: {:?}", idx.backend());

    let q = Aabb2D::new(0.0, 0.0, 30.0, 30.0);
    let candidates: Vec<_> = idx.query_rect(q).collect();
    println!("candidates for {:?}: {:?}", q, candidates);

    let exact: Vec<_> = candidates
        .iter()
        .filter(|e| q.contains_point(e.x, e.y))
        .map(|e| e.payload)
        .collect();
    println!("inside: {:?}", exact);
}
