//! The append-only marker table.
//!
//! [`MarkerStore`] owns the dense `Vec<Node>` every other clump crate works
//! against. It knows nothing about clustering: it appends rows, hands them
//! out by index, and lets the merge engine flip deletion marks and install
//! compacted tables.
//!
//! # Invariants
//!
//! - Row indices are dense and assigned in insertion order.
//! - A written row never changes except for its `deleted` mark, until a
//!   compaction rebuilds the whole table.
//! - Every merge row's children sit at lower indices and are marked deleted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use clump_types::{Marker, NodeId, NodeRole, Span};

use crate::error::{StoreError, StoreResult};
use crate::node::Node;

/// Append-only, index-addressed table of marker nodes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MarkerStore {
    nodes: Vec<Node>,
}

impl MarkerStore {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows, including deleted ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Append a marker as a new leaf row and return its index.
    ///
    /// Rejects inverted spans (`start > end`): they have no half-open
    /// reading and would corrupt overlap discovery later. Empty spans are
    /// accepted as data.
    pub fn add(&mut self, marker: Marker) -> StoreResult<NodeId> {
        if marker.span.is_inverted() {
            return Err(StoreError::InvalidSpan {
                start: marker.span.start,
                end: marker.span.end,
            });
        }

        let id = self.push(Node::leaf(marker));
        debug!(id = %id, span = %marker.span, weight = marker.weight, "added marker");
        Ok(id)
    }

    /// Append a prebuilt row and return its index.
    ///
    /// Used by the merge engine to append merge rows whose spans are hulls
    /// of already-validated children. Panics if the table has outgrown the
    /// `u32` id space.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Replace the table wholesale.
    ///
    /// Compaction uses this to install the retained, renumbered rows.
    pub fn rebuild(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    // ---------------------------------------------------------------
    // Row access
    // ---------------------------------------------------------------

    /// The row at `id`, deleted or not.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Mutable access to the row at `id`.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// All rows in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The marker payload at `id`, or `None` if the row is out of range
    /// or deleted.
    pub fn marker(&self, id: NodeId) -> Option<Marker> {
        self.nodes
            .get(id.index())
            .filter(|node| !node.deleted)
            .map(Node::marker)
    }

    /// Whether the row at `id` is deleted, or `None` if out of range.
    pub fn is_deleted(&self, id: NodeId) -> Option<bool> {
        self.nodes.get(id.index()).map(|node| node.deleted)
    }

    /// The derived role of the row at `id`, or `None` if out of range.
    pub fn role(&self, id: NodeId) -> Option<NodeRole> {
        self.nodes.get(id.index()).map(Node::role)
    }

    // ---------------------------------------------------------------
    // Live views
    // ---------------------------------------------------------------

    /// Indices of all live (non-deleted) rows, in index order.
    ///
    /// These are the top-level nodes of the forest: every live row is
    /// either a single or the root of a merge tree.
    pub fn live_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.deleted)
            .map(|(index, _)| NodeId::from_index(index))
            .collect()
    }

    /// Marker payloads of all live rows, in index order.
    pub fn markers(&self) -> Vec<Marker> {
        self.nodes
            .iter()
            .filter(|node| !node.deleted)
            .map(Node::marker)
            .collect()
    }

    /// The hull of all live rows, or `None` if none are live.
    pub fn extent(&self) -> Option<Span> {
        self.nodes
            .iter()
            .filter(|node| !node.deleted)
            .map(|node| node.span)
            .reduce(|hull, span| hull.hull(&span))
    }

    // ---------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------

    /// Validate the table's structural integrity.
    ///
    /// Checks that:
    /// - No row carries an inverted span.
    /// - Every merge row's children sit at lower indices than the row.
    /// - Every claimed child is marked deleted, and claimed exactly once.
    /// - Every deleted row is claimed by some parent.
    pub fn validate(&self) -> StoreResult<()> {
        let mut claimed = vec![false; self.nodes.len()];

        for (index, node) in self.nodes.iter().enumerate() {
            if node.span.is_inverted() {
                return Err(StoreError::InvalidSpan {
                    start: node.span.start,
                    end: node.span.end,
                });
            }

            let parent = NodeId::from_index(index);
            if let Some((left, right)) = node.children {
                for child in [left, right] {
                    if child.index() >= index {
                        return Err(StoreError::ChildOutOfOrder { parent, child });
                    }
                    if claimed[child.index()] {
                        return Err(StoreError::SharedChild { child });
                    }
                    claimed[child.index()] = true;
                    if !self.nodes[child.index()].deleted {
                        return Err(StoreError::LiveChild { parent, child });
                    }
                }
            }
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.deleted && !claimed[index] {
                return Err(StoreError::OrphanBranch {
                    node: NodeId::from_index(index),
                });
            }
        }

        Ok(())
    }

    // ---------------------------------------------------------------
    // Serialization helpers
    // ---------------------------------------------------------------

    /// Serialize the table to bincode bytes.
    pub fn to_bytes(&self) -> StoreResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Deserialize a table from bincode bytes, validating it first.
    pub fn from_bytes(data: &[u8]) -> StoreResult<Self> {
        let store: Self =
            bincode::deserialize(data).map_err(|e| StoreError::Serialization(e.to_string()))?;
        store.validate()?;
        Ok(store)
    }
}
