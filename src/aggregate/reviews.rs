//! Review aggregation

use serde_json::Value;

use crate::domain::ReviewSummary;
use crate::payload::PayloadExt;

use super::Aggregator;

#[derive(Debug, Default)]
pub struct ReviewAggregator {
    count: usize,
    rating_sum: f64,
    five_stars: usize,
}

impl Aggregator for ReviewAggregator {
    type Summary = ReviewSummary;

    fn connection_path() -> &'static [&'static str] {
        &["data", "node", "reviews"]
    }

    /// A review without a rating counts as a zero rating
    fn apply(mut self, node: &Value) -> Self {
        let rating = node.at(&["review", "rating"]).f64_or_zero();
        self.count += 1;
        self.rating_sum += rating;
        if rating == 5.0 {
            self.five_stars += 1;
        }
        self
    }

    fn finish(self) -> ReviewSummary {
        let average_rating_given = if self.count > 0 {
            self.rating_sum / self.count as f64
        } else {
            0.0
        };

        ReviewSummary {
            reviews_written: self.count,
            average_rating_given,
            five_star_reviews: self.five_stars,
        }
    }
}
