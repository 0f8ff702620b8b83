//! Experience aggregation over the same trip-event connection as stays

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::domain::{ExperienceSummary, ProductType};
use crate::payload::{non_empty, PayloadExt};

use super::trips::TRIP_EVENTS;
use super::Aggregator;

#[derive(Debug, Default)]
pub struct ExperienceAggregator {
    count: usize,
    cities: BTreeSet<String>,
}

impl Aggregator for ExperienceAggregator {
    type Summary = ExperienceSummary;

    fn connection_path() -> &'static [&'static str] {
        TRIP_EVENTS
    }

    fn apply(mut self, node: &Value) -> Self {
        if ProductType::parse(node.at(&["productType"]).str_or_empty()) != ProductType::Experience {
            return self;
        }

        self.count += 1;
        let city = node.at(&["experienceGuestProfile", "template", "cityNative"]);
        if let Some(city) = non_empty(city) {
            self.cities.insert(city.to_string());
        }
        self
    }

    fn finish(self) -> ExperienceSummary {
        ExperienceSummary {
            total_experiences: self.count,
            categories: BTreeMap::new(),
            cities: self.cities,
        }
    }
}
