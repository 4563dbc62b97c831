// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offload queries over a large store to the worker thread.
//!
//! Loads the configuration from JSON, finishes a gesture, replaces the store
//! while the query is in flight, and shows the late result being recognized
//! as stale.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lasso_demos --example selector_offload`

use std::thread;
use std::time::Duration;

use kurbo::Point;
use lasso_select::{PointStore, ScreenPoint, SelectionMode, Selector, SelectorConfig, SelectorEvent};
use log::info;

const CONFIG: &str = r#"{
    "cell_size": 40.0,
    "min_vertex_spacing": 2.0,
    "offload_threshold": 50000
}"#;

fn store(n: usize, seed: u64) -> PointStore {
    let mut x = seed;
    let mut next = move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        (x >> 11) as f64 / (1_u64 << 53) as f64
    };
    PointStore::new((0..n).map(|i| {
        let cx = next() * 1920.0;
        let cy = next() * 1080.0;
        ScreenPoint::new(format!("pt-{}", i), cx, cy, next(), cx, cy)
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SelectorConfig::from_json(CONFIG)?;
    println!("== Config ==\n  {}", serde_json::to_string(&config)?);
    let mut selector = Selector::new(config)?;
    selector.set_point_store(store(200_000, 0x9E37_79B9_7F4A_7C15));
    selector.set_mode(SelectionMode::Circle)?;

    selector.on_pointer_down(Point::new(960.0, 540.0));
    selector.on_pointer_move(Point::new(1260.0, 540.0));
    let event = selector.on_pointer_up(Point::new(1260.0, 540.0));
    println!("== Pointer up ==\n  {:?}", event);
    let result = match event {
        // No worker could be started; the query already ran on this thread.
        SelectorEvent::Finished(r) => r,
        SelectorEvent::Submitted(generation) => {
            info!("query for generation {generation} is on the worker");
            // Keep the UI thread busy with something else while the worker runs.
            loop {
                if let Some(r) = selector.poll() {
                    break r;
                }
                thread::sleep(Duration::from_millis(1));
            }
        }
        other => return Err(format!("gesture did not finish: {other:?}").into()),
    };
    println!(
        "== Result ==\n  {} of {} points, {:?}, current: {}",
        result.len(),
        selector.store().len(),
        result.stats(),
        selector.is_current(&result)
    );

    // Replace the store while a second query is in flight.
    selector.on_pointer_down(Point::new(100.0, 100.0));
    selector.on_pointer_move(Point::new(400.0, 100.0));
    selector.on_pointer_up(Point::new(400.0, 100.0));
    selector.set_point_store(store(60_000, 0xD1B5_4A32_D192_ED03));
    if let Some(late) = selector.wait() {
        println!(
            "== Late result ==\n  generation {} vs current {}: stale = {}",
            late.generation(),
            selector.generation(),
            !selector.is_current(&late)
        );
    }
    Ok(())
}
