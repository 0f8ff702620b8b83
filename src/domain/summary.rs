//! Summary records
//!
//! Immutable value records making up a year-in-review. Field order here is
//! the field order of the JSON document.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The single longest stay of the year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripDetail {
    pub location: String,
    pub nights: u64,
    pub start_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripSummary {
    /// Number of trip events in the year, experiences and unknown kinds included
    pub total_trips: usize,
    pub total_nights: u64,
    pub countries_visited: BTreeSet<String>,
    pub cities_visited: BTreeSet<String>,
    pub longest_trip: Option<TripDetail>,
    pub destinations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceSummary {
    pub total_experiences: usize,
    /// Always empty, category data is not exposed upstream
    pub categories: BTreeMap<String, u64>,
    pub cities: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub reviews_written: usize,
    pub average_rating_given: f64,
    pub five_star_reviews: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WishlistSummary {
    pub total_wishlists: usize,
    pub total_items_saved: u64,
    /// First five wishlist names in API order, unranked
    pub top_destinations: Vec<String>,
}

/// Host connections and messaging
///
/// `hosts_connected` is the number of distinct destination cities, standing
/// in for real host relationship data. `messages_exchanged` is not sourced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommunitySummary {
    pub hosts_connected: usize,
    pub messages_exchanged: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProfileSummary {
    pub member_since: String,
    pub years_as_member: i32,
    pub is_superhost: bool,
    pub is_highly_rated: bool,
    /// Not computed from available data
    pub positive_review_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelPersonality {
    pub personality_type: String,
    pub description: String,
    pub traits: Vec<String>,
}

/// Aggregate root of a generated review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearInReviewSummary {
    pub user_id: String,
    pub year: i32,
    pub generated_at: DateTime<Utc>,
    pub user_profile: UserProfileSummary,
    pub trips: TripSummary,
    pub experiences: ExperienceSummary,
    pub reviews: ReviewSummary,
    pub wishlists: WishlistSummary,
    pub community: CommunitySummary,
    pub travel_personality: Option<TravelPersonality>,
    pub total_distance_km: f64,
    pub highlights: Vec<String>,
}

impl CommunitySummary {
    pub fn from_trips(trips: &TripSummary) -> Self {
        Self {
            hosts_connected: trips.destinations.len(),
            messages_exchanged: 0,
        }
    }
}
