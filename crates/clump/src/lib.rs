//! Incremental clustering of weighted intervals via a binary merge forest.
//!
//! Markers (weighted half-open intervals) accumulate in an append-only
//! table; a merge pass links every cluster of transitively overlapping
//! markers into a binary merge tree; compaction keeps one representative
//! node per cluster and renumbers the table densely. [`MarkerList`] is the
//! main entry point and the surface a host-language binding would wrap.
//!
//! ```
//! use clump::MarkerList;
//!
//! let mut list = MarkerList::new();
//! list.add(0, 10, 1)?;
//! list.add(5, 20, 2)?;
//! list.add(100, 110, 3)?;
//!
//! assert_eq!(list.merge(), 4);     // one merge row appended
//! assert_eq!(list.compress(), 2);  // one root + one single survive
//! # Ok::<(), clump::StoreError>(())
//! ```

pub mod list;

pub use list::{MarkerList, NodeParts};

// Re-export key types
pub use clump_forest::{compress, Compaction, MergeConfig, MergeEngine, MergeOutcome};
pub use clump_store::{MarkerStore, Node, StoreError, StoreResult};
pub use clump_types::{Marker, NodeId, NodeRole, Span};

/// Version of the clump crates.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
