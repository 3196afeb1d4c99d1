// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test eligibility and the point query API.

use kurbo::Point;
use midstory_visual::VisualTree;

use crate::types::{HitTestError, InputFlags};

/// A visual tree whose nodes may expose an interactivity capability.
///
/// The capability view is optional by design: trees routinely mix
/// interactive nodes with purely visual ones (guides, adorners, debug
/// overlays), and the latter simply answer `None` here. Absence of the
/// capability makes a node ineligible for input, never an error.
pub trait InputTree: VisualTree {
    /// Interactivity snapshot for `node`, or `None` when the node does not
    /// participate in input at all.
    fn input_flags(&self, node: Self::NodeRef) -> Option<InputFlags>;
}

/// Whether `node` qualifies as an input hit target.
///
/// True iff the node exposes the interactivity capability and all of
/// [`InputFlags::CANDIDATE`] is set: visible, hit-test visible, effectively
/// enabled, and attached to a live tree. Pure and total: same snapshot,
/// same answer, no side effects, and it never fails.
pub fn is_hit_test_candidate<T: InputTree>(tree: &T, node: T::NodeRef) -> bool {
    tree.input_flags(node)
        .is_some_and(|flags| flags.contains(InputFlags::CANDIDATE))
}

/// All input hit targets under `point` in the subtree rooted at `root`,
/// topmost (last-painted) first.
///
/// The sequence is lazy and forward-only: the underlying traversal advances
/// only as elements are pulled, and a finished iterator cannot be rewound —
/// issue a new query instead. The traversal's reverse-paint order is
/// preserved unmodified; nothing is re-sorted here. A point over no eligible
/// node yields an empty sequence, which is not an error.
///
/// # Errors
///
/// [`HitTestError::MissingRoot`] if `root` is `None`, raised before any
/// traversal work is attempted.
pub fn input_elements_at<'a, T: InputTree>(
    tree: &'a T,
    root: Option<T::NodeRef>,
    point: Point,
) -> Result<impl Iterator<Item = T::NodeRef> + 'a, HitTestError> {
    let root = root.ok_or(HitTestError::MissingRoot)?;
    Ok(tree.visuals_at(root, point, is_hit_test_candidate))
}

/// The topmost input hit target under `point` in the subtree rooted at
/// `root`, or `None` when nothing eligible is there.
///
/// Exactly the first element of [`input_elements_at`], obtained with a
/// single pull of the lazy traversal: for deep or wide trees nothing below
/// the first match is visited.
///
/// # Errors
///
/// [`HitTestError::MissingRoot`] if `root` is `None`, raised before any
/// traversal work is attempted.
pub fn input_hit_test<T: InputTree>(
    tree: &T,
    root: Option<T::NodeRef>,
    point: Point,
) -> Result<Option<T::NodeRef>, HitTestError> {
    let root = root.ok_or(HitTestError::MissingRoot)?;
    Ok(tree.visual_at(root, point, is_hit_test_candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use kurbo::Rect;

    struct SceneNode {
        bounds: Rect,
        children: Vec<usize>,
        flags: Option<InputFlags>,
    }

    /// Index-addressed fixture tree counting every collaborator call.
    struct Scene {
        nodes: Vec<SceneNode>,
        calls: Cell<u32>,
    }

    impl Scene {
        fn new(nodes: Vec<SceneNode>) -> Self {
            Self {
                nodes,
                calls: Cell::new(0),
            }
        }

        fn tally(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    impl VisualTree for Scene {
        type NodeRef = usize;

        fn children(&self, node: usize) -> &[usize] {
            self.tally();
            &self.nodes[node].children
        }

        fn contains_point(&self, node: usize, point: Point) -> bool {
            self.tally();
            self.nodes[node].bounds.contains(point)
        }
    }

    impl InputTree for Scene {
        fn input_flags(&self, node: usize) -> Option<InputFlags> {
            self.nodes[node].flags
        }
    }

    fn node(bounds: Rect, children: Vec<usize>, flags: Option<InputFlags>) -> SceneNode {
        SceneNode {
            bounds,
            children,
            flags,
        }
    }

    /// Root 0 with overlapping eligible children: 1 drawn first (bottom),
    /// 2 drawn last (top). Both contain (50, 50); the root does too.
    fn overlapping_scene() -> Scene {
        Scene::new(vec![
            node(
                Rect::new(0.0, 0.0, 200.0, 200.0),
                vec![1, 2],
                Some(InputFlags::CANDIDATE),
            ),
            node(
                Rect::new(10.0, 10.0, 110.0, 110.0),
                vec![],
                Some(InputFlags::CANDIDATE),
            ),
            node(
                Rect::new(40.0, 40.0, 140.0, 140.0),
                vec![],
                Some(InputFlags::CANDIDATE),
            ),
        ])
    }

    #[test]
    fn each_flag_is_independently_required() {
        let mut scene = overlapping_scene();
        assert!(is_hit_test_candidate(&scene, 1));

        for missing in [
            InputFlags::VISIBLE,
            InputFlags::HIT_TEST_VISIBLE,
            InputFlags::EFFECTIVELY_ENABLED,
            InputFlags::ATTACHED,
        ] {
            scene.nodes[1].flags = Some(InputFlags::CANDIDATE - missing);
            assert!(
                !is_hit_test_candidate(&scene, 1),
                "clearing {missing:?} must disqualify the node"
            );
        }

        scene.nodes[1].flags = Some(InputFlags::CANDIDATE);
        assert!(is_hit_test_candidate(&scene, 1));
    }

    #[test]
    fn missing_capability_is_ineligible_not_an_error() {
        let mut scene = overlapping_scene();
        scene.nodes[1].flags = None;
        assert!(!is_hit_test_candidate(&scene, 1));
    }

    #[test]
    fn overlapping_siblings_topmost_first() {
        let scene = overlapping_scene();
        let p = Point::new(50.0, 50.0);
        let all: Vec<usize> = input_elements_at(&scene, Some(0), p).unwrap().collect();
        assert_eq!(all, vec![2, 1, 0], "last-painted node must come first");
        assert_eq!(input_hit_test(&scene, Some(0), p).unwrap(), Some(2));
    }

    #[test]
    fn opted_out_topmost_yields_to_sibling() {
        let mut scene = overlapping_scene();
        scene.nodes[2].flags = Some(InputFlags::CANDIDATE - InputFlags::HIT_TEST_VISIBLE);
        let p = Point::new(50.0, 50.0);
        let all: Vec<usize> = input_elements_at(&scene, Some(0), p).unwrap().collect();
        assert_eq!(all, vec![1, 0]);
        assert_eq!(input_hit_test(&scene, Some(0), p).unwrap(), Some(1));
    }

    #[test]
    fn disabled_topmost_yields_to_sibling() {
        let mut scene = overlapping_scene();
        scene.nodes[2].flags = Some(InputFlags::CANDIDATE - InputFlags::EFFECTIVELY_ENABLED);
        let p = Point::new(50.0, 50.0);
        assert_eq!(input_hit_test(&scene, Some(0), p).unwrap(), Some(1));
    }

    #[test]
    fn point_over_nothing_is_empty() {
        let scene = overlapping_scene();
        let q = Point::new(500.0, 500.0);
        assert_eq!(input_elements_at(&scene, Some(0), q).unwrap().count(), 0);
        assert_eq!(input_hit_test(&scene, Some(0), q).unwrap(), None);
    }

    #[test]
    fn missing_root_fails_before_any_traversal() {
        let scene = overlapping_scene();
        let p = Point::new(50.0, 50.0);

        let err = input_hit_test(&scene, None, p).unwrap_err();
        assert_eq!(err, HitTestError::MissingRoot);
        assert!(input_elements_at(&scene, None, p).is_err());

        assert_eq!(scene.calls.get(), 0, "no collaborator call may be made");
    }

    #[test]
    fn hit_test_equals_first_of_elements() {
        let scene = overlapping_scene();
        for p in [
            Point::new(50.0, 50.0),
            Point::new(20.0, 20.0),
            Point::new(130.0, 130.0),
            Point::new(190.0, 5.0),
            Point::new(500.0, 500.0),
        ] {
            let first = input_elements_at(&scene, Some(0), p).unwrap().next();
            assert_eq!(input_hit_test(&scene, Some(0), p).unwrap(), first);
        }
    }

    #[test]
    fn hit_test_short_circuits_the_walk() {
        let scene = overlapping_scene();
        assert_eq!(
            input_hit_test(&scene, Some(0), Point::new(50.0, 50.0)).unwrap(),
            Some(2)
        );
        let single = scene.calls.get();

        scene.calls.set(0);
        let _: Vec<usize> = input_elements_at(&scene, Some(0), Point::new(50.0, 50.0))
            .unwrap()
            .collect();
        let full = scene.calls.get();

        assert!(
            single < full,
            "one-result query must do strictly less work ({single} vs {full})"
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let scene = overlapping_scene();
        let p = Point::new(50.0, 50.0);
        let a: Vec<usize> = input_elements_at(&scene, Some(0), p).unwrap().collect();
        let b: Vec<usize> = input_elements_at(&scene, Some(0), p).unwrap().collect();
        assert_eq!(a, b);
        assert_eq!(
            input_hit_test(&scene, Some(0), p).unwrap(),
            input_hit_test(&scene, Some(0), p).unwrap()
        );
    }

    #[test]
    fn capability_free_interior_node_is_transparent() {
        // A capability-free wrapper sits on top; hits fall through to the
        // eligible nodes beneath it.
        let scene = Scene::new(vec![
            node(
                Rect::new(0.0, 0.0, 200.0, 200.0),
                vec![1, 2],
                Some(InputFlags::CANDIDATE),
            ),
            node(
                Rect::new(10.0, 10.0, 110.0, 110.0),
                vec![],
                Some(InputFlags::CANDIDATE),
            ),
            node(Rect::new(0.0, 0.0, 200.0, 200.0), vec![], None),
        ]);
        let p = Point::new(50.0, 50.0);
        let all: Vec<usize> = input_elements_at(&scene, Some(0), p).unwrap().collect();
        assert_eq!(all, vec![1, 0]);
    }
}
