//! Distance estimate
//!
//! Approximate only: no geocoding is done. Each visited city counts as
//! 500 km and each country beyond the first adds 1000 km.

use crate::domain::TripSummary;

const KM_PER_CITY: f64 = 500.0;
const KM_PER_EXTRA_COUNTRY: f64 = 1000.0;

/// Estimated kilometres travelled, rounded to two decimals
pub fn estimate_distance_km(trips: &TripSummary) -> f64 {
    let cities = trips.cities_visited.len();
    if cities <= 1 {
        return 0.0;
    }

    let mut distance = cities as f64 * KM_PER_CITY;

    let countries = trips.countries_visited.len();
    if countries > 1 {
        distance += (countries - 1) as f64 * KM_PER_EXTRA_COUNTRY;
    }

    (distance * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trips(cities: &[&str], countries: &[&str]) -> TripSummary {
        TripSummary {
            cities_visited: cities.iter().map(|c| c.to_string()).collect(),
            countries_visited: countries.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_for_one_city_or_fewer() {
        assert_eq!(estimate_distance_km(&trips(&[], &[])), 0.0);
        assert_eq!(estimate_distance_km(&trips(&["Paris"], &["France", "Spain"])), 0.0);
    }

    #[test]
    fn test_cities_and_extra_countries() {
        assert_eq!(estimate_distance_km(&trips(&["Paris", "Nice"], &["France"])), 1000.0);
        assert_eq!(
            estimate_distance_km(&trips(&["Paris", "Madrid", "Rome"], &["France", "Spain", "Italy"])),
            3500.0
        );
    }

    #[test]
    fn test_monotonic_in_cities_and_countries() {
        let base = estimate_distance_km(&trips(&["A", "B"], &["X"]));
        let more_cities = estimate_distance_km(&trips(&["A", "B", "C"], &["X"]));
        let more_countries = estimate_distance_km(&trips(&["A", "B", "C"], &["X", "Y"]));

        assert!(base <= more_cities);
        assert!(more_cities <= more_countries);
    }
}
