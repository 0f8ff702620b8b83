//! Aggregate module
//!
//! Reduces raw connection payloads into flat summary records. Every
//! aggregator is a fold over edge nodes; nothing here can fail, missing
//! data reads as zero.

pub mod experiences;
pub mod profile;
pub mod reviews;
pub mod trips;
pub mod wishlists;

use serde_json::Value;

use crate::payload::PayloadExt;

pub use experiences::ExperienceAggregator;
pub use profile::summarize_profile;
pub use reviews::ReviewAggregator;
pub use trips::TripAggregator;
pub use wishlists::WishlistAggregator;

/// Trait that all edge aggregators implement
pub trait Aggregator: Sized + Default {
    /// The summary record this aggregator produces
    type Summary;

    /// Path from the response root to the connection being folded
    fn connection_path() -> &'static [&'static str];

    /// Fold one edge node into the running state.
    /// Edges without a node are applied as `null`.
    fn apply(self, node: &Value) -> Self;

    /// Produce the summary record
    fn finish(self) -> Self::Summary;
}

/// Fold every edge of the aggregator's connection in `response`
pub fn fold_edges<A: Aggregator>(response: &Value) -> A::Summary {
    response
        .at(A::connection_path())
        .edges()
        .iter()
        .fold(A::default(), |state, edge| state.apply(edge.node()))
        .finish()
}
