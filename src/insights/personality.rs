//! Travel personality
//!
//! A heuristic label picked from average nights per trip, plus traits that
//! are checked independently of each other in a fixed order.

use crate::domain::{ExperienceSummary, ReviewSummary, TravelPersonality, TripSummary};

/// Average nights above which a traveler is an explorer
const EXPLORER_MIN_AVG_NIGHTS: f64 = 7.0;

/// Average nights below which a traveler is an adventurer
const ADVENTURER_MAX_AVG_NIGHTS: f64 = 3.0;

/// Average rating from which the outlook counts as positive
const POSITIVE_OUTLOOK_RATING: f64 = 4.5;

/// Countries per trip above which a traveler hops countries
const COUNTRY_HOPPER_RATIO: f64 = 0.8;

/// Personality kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalityKind {
    Explorer,
    Adventurer,
    Balanced,
}

impl PersonalityKind {
    fn from_avg_nights(avg_nights: f64) -> Self {
        if avg_nights > EXPLORER_MIN_AVG_NIGHTS {
            PersonalityKind::Explorer
        } else if avg_nights < ADVENTURER_MAX_AVG_NIGHTS {
            PersonalityKind::Adventurer
        } else {
            PersonalityKind::Balanced
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PersonalityKind::Explorer => "The Explorer",
            PersonalityKind::Adventurer => "The Adventurer",
            PersonalityKind::Balanced => "The Balanced Traveler",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonalityKind::Explorer => {
                "You love long, immersive stays to truly experience each destination"
            }
            PersonalityKind::Adventurer => {
                "You're all about variety, hopping between destinations to see it all"
            }
            PersonalityKind::Balanced => {
                "You strike the perfect balance between exploration and relaxation"
            }
        }
    }

    /// Trait that always accompanies this kind
    pub fn base_trait(&self) -> &'static str {
        match self {
            PersonalityKind::Explorer => "Extended stays",
            PersonalityKind::Adventurer => "Quick trips",
            PersonalityKind::Balanced => "Balanced stays",
        }
    }
}

/// Classify the traveler; `None` when there were no trips
pub fn travel_personality(
    trips: &TripSummary,
    experiences: &ExperienceSummary,
    reviews: &ReviewSummary,
) -> Option<TravelPersonality> {
    if trips.total_trips == 0 {
        return None;
    }

    let total_trips = trips.total_trips as f64;
    let kind = PersonalityKind::from_avg_nights(trips.total_nights as f64 / total_trips);

    let mut traits = vec![kind.base_trait().to_string()];

    if experiences.total_experiences as f64 / total_trips > 1.0 {
        traits.push("Experience seeker".to_string());
    }
    if reviews.reviews_written >= trips.total_trips {
        traits.push("Community contributor".to_string());
    }
    if reviews.average_rating_given >= POSITIVE_OUTLOOK_RATING {
        traits.push("Positive outlook".to_string());
    }
    if trips.countries_visited.len() as f64 > total_trips * COUNTRY_HOPPER_RATIO {
        traits.push("Country hopper".to_string());
    }

    Some(TravelPersonality {
        personality_type: kind.title().to_string(),
        description: kind.description().to_string(),
        traits,
    })
}
