// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy reverse-paint-order traversal under a point.

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use crate::tree::VisualTree;

/// One level of the walk: a node whose children are being visited from last
/// (topmost) to first. `remaining` counts down; once it reaches zero the node
/// itself is considered for yielding.
struct Frame<N> {
    node: N,
    remaining: usize,
}

/// Lazy iterator over the visuals under a point, topmost first.
///
/// Produced by [`VisualTree::visuals_at`]. Yields every node in the queried
/// subtree that contains the point and passes the filter, in reverse paint
/// order: within a node, later-painted children (and their subtrees) come
/// first, and each node comes after all of its children.
///
/// No traversal happens at construction; collaborator calls begin with the
/// first [`next`](Iterator::next). Each pull performs work bounded by the
/// depth and fan-out at the current position, so callers may abandon the
/// iterator at any point at no extra cost.
pub struct VisualsAt<'a, T: VisualTree, F> {
    tree: &'a T,
    point: Point,
    filter: F,
    start: Option<T::NodeRef>,
    stack: SmallVec<[Frame<T::NodeRef>; 16]>,
}

impl<'a, T, F> VisualsAt<'a, T, F>
where
    T: VisualTree,
    F: FnMut(&T, T::NodeRef) -> bool,
{
    pub(crate) fn new(tree: &'a T, root: T::NodeRef, point: Point, filter: F) -> Self {
        Self {
            tree,
            point,
            filter,
            start: Some(root),
            stack: SmallVec::new(),
        }
    }

    /// Open a frame for `node` unless its subtree is provably unreachable:
    /// a node that clips its children and does not contain the point can
    /// contribute neither itself nor anything below it.
    fn descend(&mut self, node: T::NodeRef) {
        if self.tree.clips_children(node) && !self.tree.contains_point(node, self.point) {
            return;
        }
        self.stack.push(Frame {
            node,
            remaining: self.tree.children(node).len(),
        });
    }
}

impl<T, F> Iterator for VisualsAt<'_, T, F>
where
    T: VisualTree,
    F: FnMut(&T, T::NodeRef) -> bool,
{
    type Item = T::NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.start.take() {
            self.descend(root);
        }
        while let Some(top) = self.stack.last_mut() {
            if top.remaining > 0 {
                top.remaining -= 1;
                let child = self.tree.children(top.node)[top.remaining];
                self.descend(child);
                continue;
            }
            let node = top.node;
            self.stack.pop();
            if self.tree.contains_point(node, self.point) && (self.filter)(self.tree, node) {
                return Some(node);
            }
        }
        None
    }
}

impl<T, F> core::iter::FusedIterator for VisualsAt<'_, T, F>
where
    T: VisualTree,
    F: FnMut(&T, T::NodeRef) -> bool,
{
}

impl<T: VisualTree, F> fmt::Debug for VisualsAt<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualsAt")
            .field("point", &self.point)
            .field("start", &self.start)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}
