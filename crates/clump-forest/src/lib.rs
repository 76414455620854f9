//! Merge forest engine for clump.
//!
//! Consumes a [`MarkerStore`](clump_store::MarkerStore), discovers clusters
//! of transitively overlapping top-level rows, links each cluster into a
//! binary merge tree, and compacts the table down to its representative
//! rows. One [`MergeEngine::merge`] pass finishes the forest; [`compress`]
//! then renumbers the survivors and reports the index remap.

pub mod compact;
pub mod config;
pub mod engine;

pub use compact::{compress, Compaction};
pub use config::MergeConfig;
pub use engine::{MergeEngine, MergeOutcome};
