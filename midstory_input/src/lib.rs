// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Midstory Input: point-based hit testing for input routing.
//!
//! ## Overview
//!
//! This crate decides which nodes of a visual tree are eligible to receive
//! pointer input at a point, and in what order. It is a thin, stateless
//! filter over the traversal primitive of [`midstory_visual`]:
//!
//! - [`InputFlags`] is the per-node interactivity snapshot (visible,
//!   hit-test visible, effectively enabled, attached), computed by the host
//!   property system and only read here.
//! - [`InputTree`] extends [`VisualTree`](midstory_visual::VisualTree) with
//!   an optional capability view exposing those flags. Nodes without the
//!   capability are simply never hit targets.
//! - [`is_hit_test_candidate`] is the pure eligibility predicate: all four
//!   flags, or nothing.
//! - [`input_elements_at`] enumerates every eligible node under a point,
//!   topmost first and lazily; [`input_hit_test`] returns just the topmost
//!   one and short-circuits the walk.
//!
//! Downstream input routing (target selection, capture, hover) consumes
//! these results; none of that lives here. Neither does geometry: what
//! "contains the point" means is answered entirely by the tree implementor.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use midstory_input::{InputFlags, InputTree, input_elements_at, input_hit_test};
//! use midstory_visual::VisualTree;
//!
//! struct Widget {
//!     bounds: Rect,
//!     children: Vec<usize>,
//!     flags: Option<InputFlags>,
//! }
//!
//! struct Ui(Vec<Widget>);
//!
//! impl VisualTree for Ui {
//!     type NodeRef = usize;
//!     fn children(&self, node: usize) -> &[usize] {
//!         &self.0[node].children
//!     }
//!     fn contains_point(&self, node: usize, point: Point) -> bool {
//!         self.0[node].bounds.contains(point)
//!     }
//! }
//!
//! impl InputTree for Ui {
//!     fn input_flags(&self, node: usize) -> Option<InputFlags> {
//!         self.0[node].flags
//!     }
//! }
//!
//! // A panel with two overlapping buttons; the second paints on top but
//! // opts out of hit testing.
//! let ui = Ui(vec![
//!     Widget {
//!         bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
//!         children: vec![1, 2],
//!         flags: Some(InputFlags::CANDIDATE),
//!     },
//!     Widget {
//!         bounds: Rect::new(10.0, 10.0, 70.0, 70.0),
//!         children: vec![],
//!         flags: Some(InputFlags::CANDIDATE),
//!     },
//!     Widget {
//!         bounds: Rect::new(30.0, 30.0, 90.0, 90.0),
//!         children: vec![],
//!         flags: Some(InputFlags::CANDIDATE - InputFlags::HIT_TEST_VISIBLE),
//!     },
//! ]);
//!
//! let p = Point::new(50.0, 50.0);
//! assert_eq!(input_hit_test(&ui, Some(0), p), Ok(Some(1)));
//!
//! let all: Vec<usize> = input_elements_at(&ui, Some(0), p).unwrap().collect();
//! assert_eq!(all, vec![1, 0]);
//! ```
//!
//! ## Failure semantics
//!
//! The only error raised here is [`HitTestError::MissingRoot`] for an absent
//! root reference, checked before any traversal. An empty result is normal,
//! not an error, and anything failing inside the tree implementation
//! propagates unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod types;

pub use hit::{InputTree, input_elements_at, input_hit_test, is_hit_test_candidate};
pub use types::{HitTestError, InputFlags};
