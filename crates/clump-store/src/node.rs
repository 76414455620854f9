//! Node rows of the marker table.
//!
//! Each [`Node`] is one row: a span, a weight, an optional pair of child
//! indices, and a deletion mark. Leaves carry the payload of an added
//! marker verbatim; merge nodes carry the hull and summed weight of their
//! two children. The [`NodeRole`] of a row is derived, never stored.

use serde::{Deserialize, Serialize};

use clump_types::{Marker, NodeId, NodeRole, Span};

/// One row of the marker table.
///
/// Rows are append-only: once written, the only mutation a row sees is its
/// `deleted` mark being set when a merge claims it as a child, until a
/// compaction rebuilds the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The row's own span, or the hull of its two children.
    pub span: Span,
    /// The row's own weight, or the sum of its two children's weights.
    pub weight: i64,
    /// Child indices for merge nodes; `None` for leaves. Both children
    /// always sit at lower indices than the parent.
    pub children: Option<(NodeId, NodeId)>,
    /// Set when a merge claims this row as a child.
    pub deleted: bool,
}

impl Node {
    /// Create a leaf row from a marker payload.
    pub const fn leaf(marker: Marker) -> Self {
        Self {
            span: marker.span,
            weight: marker.weight,
            children: None,
            deleted: false,
        }
    }

    /// Create a merge row covering two existing rows.
    ///
    /// The new row spans the hull of both children and carries the sum of
    /// their weights (saturating at the `i64` bounds).
    pub fn merged(left_id: NodeId, left: &Node, right_id: NodeId, right: &Node) -> Self {
        Self {
            span: left.span.hull(&right.span),
            weight: left.weight.saturating_add(right.weight),
            children: Some((left_id, right_id)),
            deleted: false,
        }
    }

    /// Returns `true` if this row has no children.
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The derived forest role of this row.
    ///
    /// Deleted rows are branches regardless of their own children; live
    /// rows are roots when merged and singles otherwise.
    pub fn role(&self) -> NodeRole {
        if self.deleted {
            NodeRole::Branch
        } else if self.children.is_some() {
            NodeRole::Root
        } else {
            NodeRole::Single
        }
    }

    /// The row's payload as a marker.
    pub const fn marker(&self) -> Marker {
        Marker::from_span(self.span, self.weight)
    }

    /// Strip forest state, turning the row back into a live leaf.
    ///
    /// Compaction applies this to every survivor so the rebuilt table
    /// behaves like a freshly seeded store.
    pub fn reset_to_leaf(&mut self) {
        self.children = None;
        self.deleted = false;
    }
}
