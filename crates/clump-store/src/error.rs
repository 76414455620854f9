//! Error types for the marker table.

use clump_types::NodeId;

/// Errors that can occur during marker table operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An interval with reversed bounds was submitted.
    #[error("invalid span: start {start} is after end {end}")]
    InvalidSpan {
        /// The submitted lower bound.
        start: i64,
        /// The submitted upper bound.
        end: i64,
    },

    /// A merge node references a child at or above its own index.
    #[error("child out of order: node {parent} references child {child}")]
    ChildOutOfOrder {
        /// The merge node containing the bad reference.
        parent: NodeId,
        /// The out-of-order child.
        child: NodeId,
    },

    /// A node is referenced as a child by more than one parent.
    #[error("child {child} is claimed by multiple parents")]
    SharedChild {
        /// The doubly-claimed child.
        child: NodeId,
    },

    /// A merge node's child is not marked deleted.
    #[error("live child: node {parent} references undeleted child {child}")]
    LiveChild {
        /// The merge node.
        parent: NodeId,
        /// The child that should be deleted.
        child: NodeId,
    },

    /// A deleted node is not referenced by any parent.
    #[error("orphan branch: node {node} is deleted but has no parent")]
    OrphanBranch {
        /// The unreferenced deleted node.
        node: NodeId,
    },

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for marker table results.
pub type StoreResult<T> = Result<T, StoreError>;
