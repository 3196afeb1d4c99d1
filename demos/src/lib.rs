// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hand-built widget scenes shared by the Midstory examples.

use kurbo::{Point, Rect};
use midstory_input::{InputFlags, InputTree};
use midstory_visual::VisualTree;

/// One widget: named bounds plus interactivity state.
pub struct Widget {
    /// Display name used when printing results.
    pub name: &'static str,
    /// Bounds in window coordinates.
    pub bounds: Rect,
    /// Children in paint order (first drawn first).
    pub children: Vec<usize>,
    /// Whether this widget confines its children's hit geometry.
    pub clips: bool,
    /// Interactivity snapshot, or `None` for purely visual widgets.
    pub flags: Option<InputFlags>,
}

/// Index-addressed widget arena.
pub struct Ui {
    /// Widget storage; indices double as node references.
    pub widgets: Vec<Widget>,
}

impl Ui {
    /// Display name of a widget.
    pub fn name(&self, node: usize) -> &'static str {
        self.widgets[node].name
    }
}

impl VisualTree for Ui {
    type NodeRef = usize;

    fn children(&self, node: usize) -> &[usize] {
        &self.widgets[node].children
    }

    fn contains_point(&self, node: usize, point: Point) -> bool {
        self.widgets[node].bounds.contains(point)
    }

    fn clips_children(&self, node: usize) -> bool {
        self.widgets[node].clips
    }
}

impl InputTree for Ui {
    fn input_flags(&self, node: usize) -> Option<InputFlags> {
        self.widgets[node].flags
    }
}

/// A dialog-like scene: a window holding a clipping form panel with two
/// overlapping buttons and a disabled field, under a decorative overlay
/// that opts out of hit testing.
pub fn dialog() -> Ui {
    Ui {
        widgets: vec![
            Widget {
                name: "window",
                bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
                children: vec![1, 5],
                clips: false,
                flags: Some(InputFlags::CANDIDATE),
            },
            Widget {
                name: "form",
                bounds: Rect::new(20.0, 20.0, 380.0, 280.0),
                children: vec![2, 3, 4],
                clips: true,
                flags: Some(InputFlags::CANDIDATE),
            },
            Widget {
                name: "cancel",
                bounds: Rect::new(40.0, 200.0, 160.0, 250.0),
                children: vec![],
                clips: false,
                flags: Some(InputFlags::CANDIDATE),
            },
            Widget {
                name: "ok",
                bounds: Rect::new(120.0, 200.0, 240.0, 250.0),
                children: vec![],
                clips: false,
                flags: Some(InputFlags::CANDIDATE),
            },
            Widget {
                name: "field",
                bounds: Rect::new(40.0, 60.0, 360.0, 100.0),
                children: vec![],
                clips: false,
                flags: Some(InputFlags::CANDIDATE - InputFlags::EFFECTIVELY_ENABLED),
            },
            Widget {
                name: "overlay",
                bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
                children: vec![],
                clips: false,
                flags: Some(InputFlags::CANDIDATE - InputFlags::HIT_TEST_VISIBLE),
            },
        ],
    }
}
