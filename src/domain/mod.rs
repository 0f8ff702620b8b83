//! Domain module
//!
//! Summary records and the small value types they are built from.

pub mod context;
pub mod events;
pub mod global_id;
pub mod summary;
pub mod window;

pub use context::RunContext;
pub use events::ProductType;
pub use global_id::encode_user_id;
pub use summary::{
    CommunitySummary, ExperienceSummary, ReviewSummary, TravelPersonality, TripDetail,
    TripSummary, UserProfileSummary, WishlistSummary, YearInReviewSummary,
};
pub use window::YearWindow;
