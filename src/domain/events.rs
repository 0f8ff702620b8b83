//! Trip events
//!
//! Trip events arrive interleaved in one connection and are told apart by
//! their `productType`.

/// Kind of product a trip event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    /// Lodging stay
    Stay,
    /// Bookable activity
    Experience,
    /// Anything else, counted as an event but not aggregated further
    Other,
}

impl ProductType {
    /// Classify the raw `productType` discriminant
    pub fn parse(raw: &str) -> Self {
        match raw {
            "STAY" => ProductType::Stay,
            "EXPERIENCE" => ProductType::Experience,
            _ => ProductType::Other,
        }
    }
}
