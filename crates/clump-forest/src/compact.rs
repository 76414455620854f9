//! Compaction: dropping branches and renumbering survivors.
//!
//! After a merge pass the table carries every leaf and every intermediate
//! merge row. [`compress`] rebuilds it with only the representative rows
//! (singles and roots), renumbered densely in their original order, and
//! reports the old-to-new index mapping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use clump_store::MarkerStore;
use clump_types::NodeId;

/// Report of a compaction pass.
///
/// Indices held from before the pass are invalid afterwards; `remap` is
/// the supported migration path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compaction {
    /// Table length before the pass.
    pub previous: usize,
    /// Table length after the pass.
    pub retained: usize,
    /// Old index to new index, `None` for discarded rows.
    pub remap: Vec<Option<NodeId>>,
}

impl Compaction {
    /// The new index of a pre-compaction row, or `None` if the row was
    /// discarded or out of range.
    pub fn new_index(&self, old: NodeId) -> Option<NodeId> {
        self.remap.get(old.index()).copied().flatten()
    }
}

/// Rebuild `store` with only its representative rows.
///
/// Survivors keep their relative order, are renumbered densely from zero,
/// and are reset to plain leaves, so the compacted table behaves like a
/// store freshly seeded with the surviving payloads. Safe to call before
/// any merge (every row is then a single) and idempotent.
pub fn compress(store: &mut MarkerStore) -> Compaction {
    let previous = store.len();
    let mut remap = vec![None; previous];
    let mut survivors = Vec::new();

    for (index, node) in store.nodes().iter().enumerate() {
        if node.role().is_representative() {
            remap[index] = Some(NodeId::from_index(survivors.len()));
            let mut row = *node;
            row.reset_to_leaf();
            survivors.push(row);
        }
    }

    let retained = survivors.len();
    store.rebuild(survivors);
    debug!(previous, retained, "compaction complete");

    Compaction {
        previous,
        retained,
        remap,
    }
}
