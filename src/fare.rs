//! Fare band lookup.

use std::fmt;

use tracing::debug;

use crate::{
    error::{FareError, Result},
    tables::FareBand,
};

pub const ALL_OTHER_TIMINGS: &str = "All other timings";
pub const ADULT_CARD_FARE: &str = "Adult card fare";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fare(pub u32);

impl Fare {
    pub fn cents(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FareBand {
    fn is_adult_card_off_peak(&self) -> bool {
        self.applicable_time == ALL_OTHER_TIMINGS && self.fare_type == ADULT_CARD_FARE
    }

    fn bound(raw: &str, column: &'static str) -> Result<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| FareError::InvalidValue {
                column,
                value: raw.to_owned(),
                expected: "distance in km",
            })
    }

    pub fn contains(&self, distance_km: f64) -> Result<bool> {
        let min = Self::bound(&self.min, "Min")?;
        let max = Self::bound(&self.max, "Max")?;
        Ok(min <= distance_km && distance_km <= max)
    }

    pub fn fare(&self) -> Result<Fare> {
        self.fare_per_ride
            .trim()
            .parse::<u32>()
            .map(Fare)
            .map_err(|_| FareError::InvalidValue {
                column: "fare_per_ride",
                value: self.fare_per_ride.clone(),
                expected: "fare in cents",
            })
    }
}

/// The adult card fare outside peak timings for a trip of `distance_km`.
///
/// Bands are checked in table order and the first one whose inclusive
/// `[Min, Max]` range holds the distance wins, so a distance on the boundary
/// of two bands takes the earlier one. `Ok(None)` means no band applies.
pub fn resolve_fare(bands: &[FareBand], distance_km: f64) -> Result<Option<Fare>> {
    for band in bands.iter().filter(|band| band.is_adult_card_off_peak()) {
        if band.contains(distance_km)? {
            let fare = band.fare()?;
            debug!(distance_km, min = %band.min, max = %band.max, %fare, "Matched fare band");
            return Ok(Some(fare));
        }
    }

    debug!(distance_km, "No fare band matched");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(applicable_time: &str, fare_type: &str, min: &str, max: &str, fare: &str) -> FareBand {
        FareBand {
            applicable_time: applicable_time.into(),
            fare_type: fare_type.into(),
            min: min.into(),
            max: max.into(),
            fare_per_ride: fare.into(),
        }
    }

    fn adult(min: &str, max: &str, fare: &str) -> FareBand {
        band(ALL_OTHER_TIMINGS, ADULT_CARD_FARE, min, max, fare)
    }

    fn two_bands() -> Vec<FareBand> {
        vec![adult("0", "3.2", "100"), adult("3.2", "4.2", "110")]
    }

    #[test]
    fn fare_display() {
        assert_eq!(Fare(150).to_string(), "$1.50");
        assert_eq!(Fare(5).to_string(), "$0.05");
        assert_eq!(Fare(0).to_string(), "$0.00");
        assert_eq!(Fare(1234).to_string(), "$12.34");
        assert_eq!(Fare(1234).cents(), 1234);
    }

    #[test]
    fn distance_inside_a_band() {
        let bands = two_bands();
        assert_eq!(resolve_fare(&bands, 1.5).unwrap(), Some(Fare(100)));
    }

    #[test]
    fn shared_boundary_goes_to_the_earlier_band() {
        let bands = two_bands();
        assert_eq!(resolve_fare(&bands, 3.2).unwrap(), Some(Fare(100)));
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let bands = two_bands();
        assert_eq!(resolve_fare(&bands, 4.2).unwrap(), Some(Fare(110)));
    }

    #[test]
    fn distance_beyond_every_band_is_not_found() {
        let bands = two_bands();
        assert_eq!(resolve_fare(&bands, 10.0).unwrap(), None);
    }

    #[test]
    fn other_timings_and_fare_types_are_skipped() {
        let bands = vec![
            band("Before 7:45am", ADULT_CARD_FARE, "0", "3.2", "50"),
            band(ALL_OTHER_TIMINGS, "Senior citizen card fare", "0", "3.2", "70"),
            adult("0", "3.2", "100"),
        ];
        assert_eq!(resolve_fare(&bands, 2.0).unwrap(), Some(Fare(100)));
    }

    #[test]
    fn skipped_bands_are_not_parsed() {
        let bands = vec![
            band("Before 7:45am", ADULT_CARD_FARE, "-", "-", "-"),
            adult("0", "3.2", "100"),
        ];
        assert_eq!(resolve_fare(&bands, 2.0).unwrap(), Some(Fare(100)));
    }

    #[test]
    fn malformed_bound_is_an_error() {
        let bands = vec![adult("0", "three", "100")];
        let err = resolve_fare(&bands, 2.0).unwrap_err();
        assert!(matches!(err, FareError::InvalidValue { column: "Max", .. }));
    }

    #[test]
    fn malformed_fare_is_an_error() {
        let bands = vec![adult("0", "3.2", "$1.00")];
        let err = resolve_fare(&bands, 2.0).unwrap_err();
        assert!(matches!(err, FareError::InvalidValue { column: "fare_per_ride", .. }));
    }

    #[test]
    fn empty_table_is_not_found() {
        assert_eq!(resolve_fare(&[], 0.0).unwrap(), None);
    }
}
