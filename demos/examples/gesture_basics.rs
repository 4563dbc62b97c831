// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a lasso gesture by hand and print what it emits.
//!
//! Shows vertex thinning, the closed preview, and how out-of-order events are
//! ignored.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lasso_demos --example gesture_basics`

use kurbo::Point;
use lasso_gesture::{Gesture, GestureEvent, SelectionMode};
use lasso_region::Region;

fn main() {
    env_logger::init();

    let mut g = Gesture::new(SelectionMode::Lasso);

    // Release before press: ignored.
    println!("== Up while idle ==\n  {:?}", g.pointer_up(Point::new(5.0, 5.0)));

    println!("== Down ==\n  {:?}", g.pointer_down(Point::new(0.0, 0.0)));
    for p in [(1.0, 1.0), (30.0, 0.0), (31.0, 1.5), (30.0, 30.0), (0.0, 30.0)] {
        match g.pointer_move(Point::from(p)) {
            GestureEvent::Preview(shape) => println!("  move {:?} -> preview {:?}", p, shape),
            other => println!("  move {:?} -> {:?}", p, other),
        }
    }

    let GestureEvent::Finished(region) = g.pointer_up(Point::new(0.0, 30.0)) else {
        unreachable!("an active gesture always finishes on release");
    };
    println!("== Region ==\n  {:?}", region);
    assert_eq!(
        region,
        Region::Polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(0.0, 30.0),
        ])
    );
    println!("  contains (15, 15): {}", region.contains(Point::new(15.0, 15.0)));
    println!("  outline: {}", region.to_path(0.1).to_svg());

    // Mode switches are only accepted between gestures.
    g.pointer_down(Point::new(0.0, 0.0));
    println!("== Mode switch mid-gesture ==\n  {:?}", g.set_mode(SelectionMode::Circle));
    g.cancel();
    println!("== Mode switch after cancel ==\n  {:?}", g.set_mode(SelectionMode::Circle));
}
