// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select scatterplot points with each gesture mode.
//!
//! Data rows without screen coordinates are projected onto an 800×600 plot,
//! then selected with a rectangle, a circle, and a lasso.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p lasso_demos --example selector_basics`

use kurbo::{Point, Rect};
use lasso_select::{
    DataBounds, DataPoint, PointStore, ScreenMapping, SelectionMode, Selector, SelectorConfig,
    SelectorEvent,
};

fn rows() -> Vec<DataPoint> {
    (0..400)
        .map(|i| {
            let t = i as f64;
            DataPoint {
                id: format!("row-{}", i).into(),
                x: (t * 0.37).sin() * 10.0 + t / 40.0,
                y: (t * 0.91).cos() * 5.0,
                score: t / 400.0,
                cx: None,
                cy: None,
            }
        })
        .collect()
}

fn drag(selector: &mut Selector, path: &[(f64, f64)]) -> SelectorEvent {
    let (first, rest) = path.split_first().expect("non-empty path");
    selector.on_pointer_down(Point::from(*first));
    for p in rest {
        selector.on_pointer_move(Point::from(*p));
    }
    let last = path.last().copied().unwrap_or(*first);
    selector.on_pointer_up(Point::from(last))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rows = rows();
    let mapping = ScreenMapping::fit(&DataBounds::of(&rows), Rect::new(0.0, 0.0, 800.0, 600.0));
    let store = PointStore::from_data(rows, &mapping);

    let mut selector = Selector::new(SelectorConfig::default()).expect("default config is valid");
    let generation = selector.set_point_store(store);
    println!("== Store ==\n  generation {}: {} points", generation, selector.store().len());

    let gestures: [(SelectionMode, &[(f64, f64)]); 3] = [
        (SelectionMode::Rectangle, &[(100.0, 100.0), (300.0, 250.0)]),
        (SelectionMode::Circle, &[(400.0, 300.0), (520.0, 300.0)]),
        (
            SelectionMode::Lasso,
            &[(50.0, 50.0), (750.0, 80.0), (700.0, 550.0), (400.0, 200.0), (80.0, 500.0)],
        ),
    ];
    for (mode, path) in gestures {
        selector.set_mode(mode).expect("no gesture is active");
        match drag(&mut selector, path) {
            SelectorEvent::Finished(result) => {
                let sample: Vec<_> = result.ids().take(5).map(|id| id.as_str()).collect();
                println!(
                    "== {} ==\n  {} selected ({} candidates, {:?}), e.g. {:?}",
                    mode,
                    result.len(),
                    result.stats().candidates,
                    result.stats().elapsed,
                    sample
                );
            }
            other => println!("== {} ==\n  {:?}", mode, other),
        }
    }
}
