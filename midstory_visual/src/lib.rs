// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Midstory Visual: the traversal seam between a retained visual tree and
//! point-based queries.
//!
//! This crate does not own a scene graph. Instead it defines [`VisualTree`],
//! a read-only view of whatever tree the host UI system keeps — children in
//! paint order plus geometric point containment — and builds a single
//! reusable primitive on top of it: a lazy, topmost-first enumeration of the
//! visuals under a point.
//!
//! - [`VisualTree::visuals_at`] walks the subtree under a root and yields
//!   every node that contains the point and passes a caller-supplied filter,
//!   frontmost (last-painted) node first.
//! - [`VisualTree::visual_at`] returns only the topmost such node and stops
//!   traversing as soon as it has one.
//!
//! Traversal is pull-based: no work happens until the returned [`VisualsAt`]
//! iterator is advanced, and abandoning it simply stops the walk. Geometry is
//! entirely the implementor's business; this crate never computes bounds,
//! transforms, or clips of its own.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use midstory_visual::VisualTree;
//!
//! // A toy scene: index-addressed nodes with axis-aligned bounds.
//! struct Scene {
//!     bounds: Vec<Rect>,
//!     children: Vec<Vec<usize>>,
//! }
//!
//! impl VisualTree for Scene {
//!     type NodeRef = usize;
//!
//!     fn children(&self, node: usize) -> &[usize] {
//!         &self.children[node]
//!     }
//!
//!     fn contains_point(&self, node: usize, point: Point) -> bool {
//!         self.bounds[node].contains(point)
//!     }
//! }
//!
//! // Root covering two overlapping children; the second child paints on top.
//! let scene = Scene {
//!     bounds: vec![
//!         Rect::new(0.0, 0.0, 100.0, 100.0),
//!         Rect::new(10.0, 10.0, 60.0, 60.0),
//!         Rect::new(40.0, 40.0, 90.0, 90.0),
//!     ],
//!     children: vec![vec![1, 2], vec![], vec![]],
//! };
//!
//! let under: Vec<usize> = scene
//!     .visuals_at(0, Point::new(50.0, 50.0), |_, _| true)
//!     .collect();
//! assert_eq!(under, vec![2, 1, 0], "topmost first");
//!
//! let top = scene.visual_at(0, Point::new(50.0, 50.0), |_, _| true);
//! assert_eq!(top, Some(2));
//! ```
//!
//! ## Ordering
//!
//! [`VisualTree::children`] lists children in paint order (first drawn
//! first), so each subtree paints above its parent and a later sibling paints
//! above an earlier one. Queries yield the exact reverse of that paint order
//! and never re-sort; for a well-formed tree this is already a strict total
//! order, so there are no ties to break.
//!
//! ## Threading
//!
//! Queries are synchronous and take no locks. The caller must not mutate the
//! tree while a single query's iterator is live; this is the host's usual
//! UI-thread discipline, not something re-checked here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod walk;

pub use tree::VisualTree;
pub use walk::VisualsAt;
