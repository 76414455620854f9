use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a node in the merge forest.
///
/// Exactly one role applies to every node at any point in time. `Single`
/// and `Root` are the representative roles: one of them tops each cluster,
/// and only they survive compaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// A leaf whose cluster contains only itself; it was never merged.
    Single,
    /// The top node of a merge tree covering two or more markers.
    Root,
    /// A node that was merged into a parent; discarded by compaction.
    Branch,
}

impl NodeRole {
    /// Returns `true` for the roles that survive compaction.
    pub const fn is_representative(&self) -> bool {
        matches!(self, Self::Single | Self::Root)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Root => write!(f, "root"),
            Self::Branch => write!(f, "branch"),
        }
    }
}
