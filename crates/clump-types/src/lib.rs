//! Foundation types for the clump merge engine.
//!
//! This crate provides the small value types shared by every other clump
//! crate. It carries no clustering logic of its own beyond span geometry.
//!
//! # Key Types
//!
//! - [`Span`] — Half-open interval `[start, end)` with overlap and hull ops
//! - [`Marker`] — A weighted span, the unit of input to the store
//! - [`NodeId`] — Dense 0-based index of a node in the marker table
//! - [`NodeRole`] — Forest classification of a node: single, root, or branch

pub mod id;
pub mod marker;
pub mod role;
pub mod span;

pub use id::NodeId;
pub use marker::Marker;
pub use role::NodeRole;
pub use span::Span;
