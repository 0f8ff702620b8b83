//! Per-domain fetchers
//!
//! Each fetcher sends one fixed query and hands back the raw response tree.
//! None of them retry.

use serde_json::{json, Value};

use crate::domain::{RunContext, YearWindow};
use crate::error::AppResult;
use crate::graphql::{queries, GraphQlClient};
use crate::payload::PayloadExt;

/// Raw responses of one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPayloads {
    pub profile: Value,
    pub trips: Value,
    pub reviews: Value,
    pub wishlists: Value,
}

/// Fetches the activity of the user named by the run context
#[derive(Debug, Clone, Copy)]
pub struct Fetcher<'a> {
    client: &'a GraphQlClient,
    context: &'a RunContext,
}

impl<'a> Fetcher<'a> {
    pub fn new(client: &'a GraphQlClient, context: &'a RunContext) -> Self {
        Self { client, context }
    }

    /// Account creation date and badges
    pub async fn fetch_profile(&self) -> AppResult<Value> {
        tracing::info!("Fetching user profile...");
        self.client
            .execute(
                queries::USER_PROFILE,
                Some(json!({ "userId": self.context.global_user_id() })),
            )
            .await
    }

    /// Up to 100 most recent trip events, narrowed to `window`.
    ///
    /// Only one page is requested. A user with more than 100 events overall
    /// can therefore be under-counted for an older year.
    pub async fn fetch_trips(&self, window: &YearWindow) -> AppResult<Value> {
        tracing::info!("Fetching trip data...");
        let mut result = self
            .client
            .execute(
                queries::USER_TRIPS,
                Some(json!({ "userId": self.context.user_id })),
            )
            .await?;

        retain_trips_in_window(&mut result, window);
        Ok(result)
    }

    /// Up to 100 reviews written by the user
    pub async fn fetch_reviews(&self) -> AppResult<Value> {
        tracing::info!("Fetching review data...");
        self.client
            .execute(
                queries::USER_REVIEWS,
                Some(json!({ "userId": self.context.global_user_id() })),
            )
            .await
    }

    /// Up to 50 wishlists of the viewer the request headers identify
    pub async fn fetch_wishlists(&self) -> AppResult<Value> {
        tracing::info!("Fetching wishlist data...");
        self.client.execute(queries::VIEWER_WISHLISTS, None).await
    }

    /// Run all four fetches concurrently; the first failure aborts the rest
    pub async fn fetch_all(&self, window: &YearWindow) -> AppResult<RawPayloads> {
        let (profile, trips, reviews, wishlists) = tokio::try_join!(
            self.fetch_profile(),
            self.fetch_trips(window),
            self.fetch_reviews(),
            self.fetch_wishlists(),
        )?;

        Ok(RawPayloads {
            profile,
            trips,
            reviews,
            wishlists,
        })
    }
}

/// Drop trip events starting outside `window`, in place.
///
/// Events without a `startsAt` are dropped too. Payloads without a
/// `tripEvents` connection are left untouched.
pub fn retain_trips_in_window(result: &mut Value, window: &YearWindow) {
    let Some(edges) = result
        .pointer_mut("/data/trips/tripEvents/edges")
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    let before = edges.len();
    edges.retain(|edge| {
        let starts_at = edge.node().at(&["startsAt"]).str_or_empty();
        !starts_at.is_empty() && window.contains(starts_at)
    });

    tracing::debug!(
        kept = edges.len(),
        dropped = before - edges.len(),
        "Filtered trip events to {}..{}",
        window.start(),
        window.end()
    );
}
