//! Trip aggregation
//!
//! Stays contribute nights, places, and the longest-trip record. Every edge,
//! whatever its product type, counts toward `total_trips`.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::domain::{ProductType, TripDetail, TripSummary};
use crate::payload::{non_empty, PayloadExt};

use super::Aggregator;

pub(crate) const TRIP_EVENTS: &[&str] = &["data", "trips", "tripEvents"];

#[derive(Debug, Default)]
pub struct TripAggregator {
    events: usize,
    total_nights: u64,
    countries: BTreeSet<String>,
    cities: BTreeSet<String>,
    longest_trip: Option<TripDetail>,
}

impl TripAggregator {
    fn apply_stay(&mut self, stay: &Value) {
        let nights = stay.at(&["numberOfNights"]).u64_or_zero();
        self.total_nights += nights;

        let address = stay.at(&[
            "listing",
            "supplyListing",
            "location",
            "defaultAddress",
        ]);
        let country = non_empty(address.at(&["country"]));
        let city = non_empty(address.at(&["locality"]));

        if let Some(country) = country {
            self.countries.insert(country.to_string());
        }
        if let Some(city) = city {
            self.cities.insert(city.to_string());
        }

        // Strict: on a tie the first stay seen keeps the record.
        let longest = self.longest_trip.as_ref().map_or(0, |t| t.nights);
        if nights > longest {
            self.longest_trip = Some(TripDetail {
                location: city.or(country).unwrap_or("Unknown").to_string(),
                nights,
                start_date: stay.at(&["startDate"]).str_or_empty().to_string(),
            });
        }
    }
}

impl Aggregator for TripAggregator {
    type Summary = TripSummary;

    fn connection_path() -> &'static [&'static str] {
        TRIP_EVENTS
    }

    fn apply(mut self, node: &Value) -> Self {
        self.events += 1;
        if ProductType::parse(node.at(&["productType"]).str_or_empty()) == ProductType::Stay {
            self.apply_stay(node.at(&["stayReservation"]));
        }
        self
    }

    fn finish(self) -> TripSummary {
        TripSummary {
            total_trips: self.events,
            total_nights: self.total_nights,
            destinations: self.cities.iter().cloned().collect(),
            countries_visited: self.countries,
            cities_visited: self.cities,
            longest_trip: self.longest_trip,
        }
    }
}
