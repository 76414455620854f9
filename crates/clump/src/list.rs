//! The high-level marker list.
//!
//! [`MarkerList`] bundles a [`MarkerStore`] with a [`MergeEngine`] behind
//! the call surface a host binding would wrap one to one: add markers,
//! merge, inspect nodes, compress. Every method is a thin pass-through;
//! the underlying table stays reachable through [`MarkerList::store`].

use serde::{Deserialize, Serialize};

use clump_forest::{compress, Compaction, MergeConfig, MergeEngine};
use clump_store::{MarkerStore, StoreResult};
use clump_types::{Marker, NodeId, NodeRole, Span};

/// Caller-facing view of one node's forest state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeParts {
    /// The node's derived role.
    pub role: NodeRole,
    /// The node's span (own span for leaves, hull for merge nodes).
    pub span: Span,
    /// The node's weight (own weight for leaves, sum for merge nodes).
    pub weight: i64,
    /// Child indices for merge nodes, `None` for leaves.
    pub children: Option<(NodeId, NodeId)>,
}

/// An incrementally clustered collection of weighted intervals.
///
/// Markers accumulate as leaves until [`merge`] links overlapping ones
/// into binary merge trees; [`compress`] then discards everything but the
/// representative node of each cluster. Adding more markers after a merge
/// is supported: new leaves are top-level until the next pass picks them
/// up.
///
/// [`merge`]: MarkerList::merge
/// [`compress`]: MarkerList::compress
#[derive(Clone, Debug, Default)]
pub struct MarkerList {
    store: MarkerStore,
    engine: MergeEngine,
}

impl MarkerList {
    /// An empty list merging on true overlap only.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty list with an explicit merge configuration.
    pub fn with_config(config: MergeConfig) -> Self {
        Self {
            store: MarkerStore::new(),
            engine: MergeEngine::with_config(config),
        }
    }

    /// The merge configuration in effect.
    pub fn config(&self) -> &MergeConfig {
        self.engine.config()
    }

    /// Read access to the underlying table.
    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    // ---- Building ----

    /// Append a marker and return its node index.
    ///
    /// Fails on inverted bounds (`start > end`); an empty interval
    /// (`start == end`) is accepted.
    pub fn add(&mut self, start: i64, end: i64, weight: i64) -> StoreResult<NodeId> {
        self.store.add(Marker::new(start, end, weight))
    }

    /// Total node count, including merge nodes and deleted rows.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no markers have been added.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ---- Clustering ----

    /// Merge all overlapping top-level nodes and return the new total
    /// node count.
    pub fn merge(&mut self) -> usize {
        self.engine.merge(&mut self.store).total
    }

    /// Discard non-representative nodes, renumber the survivors, and
    /// return the new total node count.
    ///
    /// Indices handed out before this call are invalidated; use
    /// [`compact`](MarkerList::compact) when the old-to-new mapping is
    /// needed.
    pub fn compress(&mut self) -> usize {
        compress(&mut self.store).retained
    }

    /// Like [`compress`](MarkerList::compress), but returns the full
    /// compaction report including the index remap.
    pub fn compact(&mut self) -> Compaction {
        compress(&mut self.store)
    }

    // ---- Inspection ----

    /// The marker payload at `id`, or `None` if out of range or deleted.
    pub fn marker(&self, id: NodeId) -> Option<Marker> {
        self.store.marker(id)
    }

    /// Whether the node at `id` was merged away, or `None` if out of range.
    pub fn is_deleted(&self, id: NodeId) -> Option<bool> {
        self.store.is_deleted(id)
    }

    /// Role, span, weight, and children of the node at `id`.
    pub fn parts(&self, id: NodeId) -> Option<NodeParts> {
        self.store.node(id).map(|node| NodeParts {
            role: node.role(),
            span: node.span,
            weight: node.weight,
            children: node.children,
        })
    }

    /// Payloads of all live nodes, in index order.
    pub fn markers(&self) -> Vec<Marker> {
        self.store.markers()
    }

    /// The hull of all live nodes, or `None` if the list is empty.
    pub fn extent(&self) -> Option<Span> {
        self.store.extent()
    }
}
