//! Year-in-review generation
//!
//! Fetch, aggregate, derive. Data only flows forward; the trip payload feeds
//! both the trip and the experience aggregators.

use chrono::{DateTime, Utc};
use tracing::Instrument;

use crate::aggregate::{
    fold_edges, summarize_profile, ExperienceAggregator, ReviewAggregator, TripAggregator,
    WishlistAggregator,
};
use crate::domain::{CommunitySummary, RunContext, YearInReviewSummary, YearWindow};
use crate::error::AppResult;
use crate::fetch::{Fetcher, RawPayloads};
use crate::graphql::GraphQlClient;
use crate::insights::{estimate_distance_km, highlights, travel_personality};

/// Builds the year-in-review of one user
#[derive(Debug, Clone)]
pub struct YearInReviewGenerator {
    client: GraphQlClient,
    context: RunContext,
}

impl YearInReviewGenerator {
    pub fn new(client: GraphQlClient, context: RunContext) -> Self {
        Self { client, context }
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Fetch everything and assemble the summary
    pub async fn generate(&self) -> AppResult<YearInReviewSummary> {
        let span = tracing::info_span!(
            "year_in_review",
            run_id = %self.context.run_id,
            user_id = %self.context.user_id,
            year = self.context.year,
        );

        self.run().instrument(span).await
    }

    async fn run(&self) -> AppResult<YearInReviewSummary> {
        tracing::info!(
            "Generating Year-in-Review for user {} for year {}...",
            self.context.user_id,
            self.context.year
        );

        let window = YearWindow::for_year(self.context.year);
        let payloads = Fetcher::new(&self.client, &self.context)
            .fetch_all(&window)
            .await?;

        let summary = build_summary(&self.context, &payloads, Utc::now());

        tracing::info!(
            trips = summary.trips.total_trips,
            nights = summary.trips.total_nights,
            experiences = summary.experiences.total_experiences,
            reviews = summary.reviews.reviews_written,
            wishlists = summary.wishlists.total_wishlists,
            "Year-in-Review generated"
        );

        Ok(summary)
    }
}

/// Assemble a summary from already-fetched payloads
pub fn build_summary(
    context: &RunContext,
    payloads: &RawPayloads,
    generated_at: DateTime<Utc>,
) -> YearInReviewSummary {
    let user_profile = summarize_profile(&payloads.profile, context.year);
    let trips = fold_edges::<TripAggregator>(&payloads.trips);
    let experiences = fold_edges::<ExperienceAggregator>(&payloads.trips);
    let reviews = fold_edges::<ReviewAggregator>(&payloads.reviews);
    let wishlists = fold_edges::<WishlistAggregator>(&payloads.wishlists);
    let community = CommunitySummary::from_trips(&trips);

    let travel_personality = travel_personality(&trips, &experiences, &reviews);
    let total_distance_km = estimate_distance_km(&trips);
    let highlights = highlights(&trips, &experiences, &reviews, &wishlists);

    YearInReviewSummary {
        user_id: context.user_id.clone(),
        year: context.year,
        generated_at,
        user_profile,
        trips,
        experiences,
        reviews,
        wishlists,
        community,
        travel_personality,
        total_distance_km,
        highlights,
    }
}
