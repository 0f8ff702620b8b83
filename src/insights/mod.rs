//! Insights module
//!
//! Derived features computed from the aggregated summaries: a travel
//! personality, an approximate distance, and highlight lines.

mod distance;
mod highlights;
mod personality;

pub use distance::estimate_distance_km;
pub use highlights::highlights;
pub use personality::{travel_personality, PersonalityKind};
