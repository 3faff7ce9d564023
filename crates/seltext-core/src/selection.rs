//! Selection ranges over a document-ordered node sequence.

use std::fmt;

/// Position of a text-bearing node in document order across the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One endpoint of a selection: a node and a character offset into its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    pub node: NodeId,
    pub offset: usize,
}

impl Boundary {
    pub fn new(node: usize, offset: usize) -> Self {
        Self {
            node: NodeId(node),
            offset,
        }
    }
}

/// An immutable snapshot of a user selection.
///
/// `start` is expected to precede or equal `end` in document order; use
/// [`SelectionRange::from_anchor_focus`] when the user may have dragged
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRange {
    pub start: Boundary,
    pub end: Boundary,
}

impl SelectionRange {
    pub fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// A range covering `[start, end)` of a single node.
    pub fn within(node: usize, start: usize, end: usize) -> Self {
        Self::new(Boundary::new(node, start), Boundary::new(node, end))
    }

    /// Build a range from the anchor (where the drag began) and the focus
    /// (where it ended), ordering the two in document order.
    pub fn from_anchor_focus(anchor: Boundary, focus: Boundary) -> Self {
        if focus < anchor {
            Self::new(focus, anchor)
        } else {
            Self::new(anchor, focus)
        }
    }

    /// Returns `true` if the range selects nothing.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `node` lies between the range's endpoint nodes.
    ///
    /// A node before the start node or after the end node lies entirely
    /// outside the range; every other node intersects it.
    pub fn spans_node(&self, node: NodeId) -> bool {
        self.start.node <= node && node <= self.end.node
    }
}
