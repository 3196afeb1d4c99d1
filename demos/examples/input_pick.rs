// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input hit testing over a small widget scene.
//!
//! Probes the shared dialog scene — overlapping buttons, a disabled field,
//! a hit-test-invisible overlay — with `input_hit_test` and
//! `input_elements_at`.
//!
//! Run:
//! - `cargo run -p midstory_demos --example input_pick`

use kurbo::Point;
use midstory_demos::dialog;
use midstory_input::{input_elements_at, input_hit_test};

fn main() {
    let ui = dialog();

    let probes = [
        ("button overlap", Point::new(140.0, 225.0)),
        ("cancel only", Point::new(60.0, 225.0)),
        ("disabled field", Point::new(200.0, 80.0)),
        ("window margin", Point::new(5.0, 5.0)),
        ("outside", Point::new(450.0, 150.0)),
    ];

    for (label, point) in probes {
        let top = input_hit_test(&ui, Some(0), point)
            .expect("root is present")
            .map(|n| ui.name(n))
            .unwrap_or("<none>");
        let stack: Vec<&str> = input_elements_at(&ui, Some(0), point)
            .expect("root is present")
            .map(|n| ui.name(n))
            .collect();
        println!("{label:>14} at {point:?}: top = {top}, stack = {stack:?}");
    }

    // An absent root is the one condition the query itself rejects.
    let err = input_hit_test(&ui, None, Point::new(0.0, 0.0)).unwrap_err();
    println!("\nquery without a root: {err}");
}
