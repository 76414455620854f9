use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense 0-based index of a node in the marker table.
///
/// Ids are assigned in insertion order and never reused while the table
/// grows. Compaction renumbers the surviving nodes, so ids held across a
/// compaction are only meaningful through the remap it returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Create an id from a raw index.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Create an id from a table position.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not fit the `u32` id space, the cap on
    /// node table growth.
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => Self(raw),
            Err(_) => panic!("node index {index} does not fit the u32 id space"),
        }
    }

    /// The raw index as a `usize`, for table addressing.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The raw index.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
