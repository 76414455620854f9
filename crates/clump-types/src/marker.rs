use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A weighted interval, the unit of input to the marker store.
///
/// The weight is opaque to the engine: it is summed into the parent when
/// markers merge and is never consulted when deciding what merges with what.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker {
    /// The half-open interval the marker covers.
    pub span: Span,
    /// Opaque payload weight.
    pub weight: i64,
}

impl Marker {
    /// Create a marker from raw bounds and a weight.
    pub const fn new(start: i64, end: i64, weight: i64) -> Self {
        Self {
            span: Span::new(start, end),
            weight,
        }
    }

    /// Create a marker from an existing span.
    pub const fn from_span(span: Span, weight: i64) -> Self {
        Self { span, weight }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} w{}", self.span, self.weight)
    }
}
