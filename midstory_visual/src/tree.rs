// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of a retained visual tree.

use core::fmt::Debug;

use kurbo::Point;

use crate::walk::VisualsAt;

/// Read-only view of a retained visual tree, as consumed by point queries.
///
/// The implementor owns the scene: node storage, transforms, clipping, and
/// render-order bookkeeping all live on its side of this trait. Queries hold
/// only transient [`NodeRef`](Self::NodeRef)s and read the tree; nothing here
/// mutates or caches node state.
///
/// ## Contract
///
/// - [`children`](Self::children) lists children in paint order: the first
///   child is drawn first, the last child paints on top of its siblings, and
///   every child paints on top of its parent.
/// - [`contains_point`](Self::contains_point) answers geometric containment
///   under the node's current transform, for a point given in the coordinate
///   space of the queried root. A panic inside an implementation propagates
///   out of the query unchanged; the query layer has no recovery for a
///   broken tree.
/// - The tree must not be mutated while a query returned from
///   [`visuals_at`](Self::visuals_at) is still being pulled.
pub trait VisualTree {
    /// Transient reference to a node, valid for the duration of one query.
    type NodeRef: Copy + PartialEq + Debug;

    /// Children of `node` in paint order (first drawn first).
    fn children(&self, node: Self::NodeRef) -> &[Self::NodeRef];

    /// Whether `point` falls inside `node`'s geometry under its current
    /// transform.
    fn contains_point(&self, node: Self::NodeRef, point: Point) -> bool;

    /// Whether `node` confines its children's hit geometry to its own.
    ///
    /// When this returns `true` and the queried point falls outside `node`,
    /// the whole subtree is skipped. The default is `false`: children may
    /// extend beyond their parent and are always visited.
    fn clips_children(&self, _node: Self::NodeRef) -> bool {
        false
    }

    /// All visuals under `point` in the subtree rooted at `root`, topmost
    /// (last-painted) first, filtered by `filter`.
    ///
    /// The returned iterator is lazy and forward-only: traversal advances
    /// only as elements are pulled, and a finished or abandoned iterator
    /// cannot be restarted — issue a new query instead. Nodes failing either
    /// geometric containment or `filter` are skipped, not errors; a point
    /// over nothing yields an empty iterator.
    fn visuals_at<F>(&self, root: Self::NodeRef, point: Point, filter: F) -> VisualsAt<'_, Self, F>
    where
        Self: Sized,
        F: FnMut(&Self, Self::NodeRef) -> bool,
    {
        VisualsAt::new(self, root, point, filter)
    }

    /// The topmost visual under `point` in the subtree rooted at `root`
    /// accepted by `filter`, or `None`.
    ///
    /// Equivalent to the first element of [`visuals_at`](Self::visuals_at),
    /// and stops the underlying traversal as soon as one node is found.
    fn visual_at<F>(&self, root: Self::NodeRef, point: Point, filter: F) -> Option<Self::NodeRef>
    where
        Self: Sized,
        F: FnMut(&Self, Self::NodeRef) -> bool,
    {
        self.visuals_at(root, point, filter).next()
    }
}
