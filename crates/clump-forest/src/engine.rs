//! Overlap discovery and merge-tree construction.
//!
//! [`MergeEngine::merge`] grows the forest inside a [`MarkerStore`]: it
//! finds clusters of transitively overlapping top-level rows and links
//! each cluster into a binary merge tree, appending one merge row per
//! pairwise merge and marking both inputs deleted.
//!
//! # Invariants
//!
//! - One pass suffices: after a merge pass, no two live rows overlap
//!   within the configured slack, so a second pass creates nothing.
//! - The set of clusters depends only on the live rows, not on the order
//!   they were visited; tree shape inside a cluster follows sweep order.
//! - Children always sit at lower indices than their parent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use clump_store::{MarkerStore, Node};
use clump_types::NodeId;

use crate::config::MergeConfig;

/// Result summary of a merge pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Table length after the pass, counting leaves and all merge rows.
    pub total: usize,
    /// Number of merge rows created by this pass.
    pub created: usize,
}

/// Builds merge forests over a marker table.
///
/// The engine is stateless between calls; all forest state lives in the
/// store it is handed.
#[derive(Clone, Debug, Default)]
pub struct MergeEngine {
    config: MergeConfig,
}

impl MergeEngine {
    /// An engine with the default (strict overlap) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with an explicit configuration.
    pub fn with_config(config: MergeConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Run one merge pass over the live rows of `store`.
    ///
    /// Live rows are swept in `(start, id)` order while a current chain is
    /// kept open. A row that overlaps the chain's hull within the slack is
    /// merged into it: both rows are marked deleted and a fresh merge row
    /// with their hull and summed weight becomes the new chain top. A row
    /// out of reach closes the chain and opens a new one.
    ///
    /// The one exception is an empty row out of reach at zero slack: it is
    /// left as a single without closing the chain, since no chain that
    /// starts at or after it can ever reach it, while the open chain may
    /// still have to absorb rows that start before its own end.
    pub fn merge(&self, store: &mut MarkerStore) -> MergeOutcome {
        let slack = self.config.effective_slack();

        let mut order: Vec<(NodeId, Node)> = store
            .live_ids()
            .into_iter()
            .filter_map(|id| store.node(id).map(|node| (id, *node)))
            .collect();
        order.sort_by_key(|(id, node)| (node.span.start, *id));

        let mut created = 0usize;
        let mut chain: Option<(NodeId, Node)> = None;

        for (id, node) in order {
            let Some((chain_id, chain_node)) = chain else {
                chain = Some((id, node));
                continue;
            };

            if chain_node.span.overlaps_within(&node.span, slack) {
                if let Some(row) = store.node_mut(chain_id) {
                    row.deleted = true;
                }
                if let Some(row) = store.node_mut(id) {
                    row.deleted = true;
                }
                let parent = Node::merged(chain_id, &chain_node, id, &node);
                let parent_id = store.push(parent);
                created += 1;
                chain = Some((parent_id, parent));
            } else if slack == 0 && node.span.is_empty() {
                // Unreachable empty row: stays live as a single, and the
                // chain stays open for rows starting before its hull end.
            } else {
                chain = Some((id, node));
            }
        }

        let total = store.len();
        debug!(total, created, slack, "merge pass complete");
        MergeOutcome { total, created }
    }
}
