//! Wishlist aggregation

use serde_json::Value;

use crate::domain::WishlistSummary;
use crate::payload::{non_empty, PayloadExt};

use super::Aggregator;

/// Number of wishlist names kept as top destinations
pub const TOP_DESTINATIONS: usize = 5;

#[derive(Debug, Default)]
pub struct WishlistAggregator {
    count: usize,
    items: u64,
    names: Vec<String>,
}

impl Aggregator for WishlistAggregator {
    type Summary = WishlistSummary;

    fn connection_path() -> &'static [&'static str] {
        &["data", "viewer", "wishlists"]
    }

    fn apply(mut self, node: &Value) -> Self {
        self.count += 1;

        let counts = node.at(&["productCounts"]);
        self.items += counts.at(&["staysCount"]).u64_or_zero();
        self.items += counts.at(&["experiencesCount"]).u64_or_zero();

        if let Some(name) = non_empty(node.at(&["name"])) {
            self.names.push(name.to_string());
        }
        self
    }

    fn finish(mut self) -> WishlistSummary {
        // API order, not popularity.
        self.names.truncate(TOP_DESTINATIONS);

        WishlistSummary {
            total_wishlists: self.count,
            total_items_saved: self.items,
            top_destinations: self.names,
        }
    }
}
