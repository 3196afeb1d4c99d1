// Copyright 2026 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: interactivity flags and the query error.

use core::fmt;

bitflags::bitflags! {
    /// Interactivity snapshot for a node, as computed by the host property
    /// system.
    ///
    /// These are read-only facts at query time; the hit-test layer neither
    /// caches nor mutates them. A node is a hit-test candidate only when all
    /// four are set (see [`InputFlags::CANDIDATE`]).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputFlags: u8 {
        /// Node is visible.
        const VISIBLE             = 0b0000_0001;
        /// Node participates in hit testing. Independent of visibility: a
        /// visible but decorative node (for example an overlay) clears this
        /// to let input pass through.
        const HIT_TEST_VISIBLE    = 0b0000_0010;
        /// Node is enabled, taking inherited enabled state into account,
        /// not just the node's own flag.
        const EFFECTIVELY_ENABLED = 0b0000_0100;
        /// Node is attached to a live tree. Guards against testing nodes
        /// that were detached while a caller still holds a reference.
        const ATTACHED            = 0b0000_1000;
    }
}

impl InputFlags {
    /// Flags a node must carry, all at once, to be a hit-test candidate.
    pub const CANDIDATE: Self = Self::VISIBLE
        .union(Self::HIT_TEST_VISIBLE)
        .union(Self::EFFECTIVELY_ENABLED)
        .union(Self::ATTACHED);
}

impl Default for InputFlags {
    /// A visible, enabled node attached to its tree and open to hit testing.
    fn default() -> Self {
        Self::CANDIDATE
    }
}

/// Error raised by the input hit-test queries.
///
/// This is the only failure the query layer produces of its own; anything
/// going wrong inside the visual-tree collaborator propagates unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTestError {
    /// The queried root node reference was absent.
    ///
    /// Signaled before any traversal begins; no collaborator call is made.
    MissingRoot,
}

impl fmt::Display for HitTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRoot => write!(f, "input hit test requires a root node"),
        }
    }
}

impl core::error::Error for HitTestError {}
