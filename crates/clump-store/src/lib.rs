//! Append-only marker table for the clump merge engine.
//!
//! [`MarkerStore`] is the backing structure the whole engine works against:
//! a dense, index-addressed table of [`Node`] rows. Markers enter as leaf
//! rows via [`MarkerStore::add`]; the merge engine appends merge rows and
//! marks their children deleted; compaction rebuilds the table with only
//! the surviving rows. The store itself contains no clustering logic.

pub mod error;
pub mod node;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use node::Node;
pub use store::MarkerStore;
