//! Highlight lines
//!
//! One line per non-empty summary dimension, always in the same order.

use crate::domain::{ExperienceSummary, ReviewSummary, TripSummary, WishlistSummary};

pub fn highlights(
    trips: &TripSummary,
    experiences: &ExperienceSummary,
    reviews: &ReviewSummary,
    wishlists: &WishlistSummary,
) -> Vec<String> {
    let mut lines = Vec::new();

    if trips.total_trips > 0 {
        lines.push(format!(
            "🌍 You explored {} countries and {} cities!",
            trips.countries_visited.len(),
            trips.cities_visited.len()
        ));
    }

    if trips.total_nights > 0 {
        lines.push(format!("🏠 You spent {} nights away from home", trips.total_nights));
    }

    if let Some(longest) = &trips.longest_trip {
        lines.push(format!(
            "⏱️  Your longest adventure: {} nights in {}",
            longest.nights, longest.location
        ));
    }

    if experiences.total_experiences > 0 {
        lines.push(format!(
            "🎭 You tried {} unique experiences",
            experiences.total_experiences
        ));
    }

    if reviews.reviews_written > 0 {
        lines.push(format!(
            "⭐ You wrote {} reviews ({} were 5-star!)",
            reviews.reviews_written, reviews.five_star_reviews
        ));
    }

    if wishlists.total_items_saved > 0 {
        lines.push(format!(
            "💝 You saved {} places to your wishlists for future adventures",
            wishlists.total_items_saved
        ));
    }

    lines
}
