//! Distance travelled along a single route.
//!
//! Each route table row records the cumulative distance from the start of
//! its route to one stop. The distance of a trip is the difference between
//! the cumulative distances of the boarding and alighting stops.

use std::fmt;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    error::{FareError, Result},
    tables::{BusStop, Station},
};

pub const INTERCHANGE_STATIONS: [&str; 2] = ["PTC", "STC"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopLookup {
    #[default]
    Lenient,
    Strict,
}

pub trait RouteRow {
    type Stop: ?Sized + fmt::Display;

    fn route_id(&self) -> &str;

    fn is_stop(&self, stop: &Self::Stop) -> bool;

    fn raw_distance(&self) -> &str;

    fn distance_km(&self) -> Result<f64> {
        let raw = self.raw_distance();
        raw.trim()
            .parse::<f64>()
            .map_err(|_| FareError::InvalidValue {
                column: "Distance",
                value: raw.to_owned(),
                expected: "distance in km",
            })
    }
}

impl RouteRow for BusStop {
    type Stop = i64;

    fn route_id(&self) -> &str {
        &self.service_no
    }

    fn is_stop(&self, stop: &i64) -> bool {
        self.bus_stop_code
            .trim()
            .parse::<i64>()
            .is_ok_and(|code| code == *stop)
    }

    fn raw_distance(&self) -> &str {
        &self.distance
    }
}

impl RouteRow for Station {
    type Stop = str;

    fn route_id(&self) -> &str {
        &self.station_line
    }

    fn is_stop(&self, stop: &str) -> bool {
        self.station_id == stop
    }

    fn raw_distance(&self) -> &str {
        &self.distance
    }
}

/// Absolute distance in km between `start` and `end` on `route_id`.
///
/// Rows are scanned in table order. The start stop's cumulative distance is
/// subtracted and the end stop's is added; a row matching both counts as the
/// start only. With [`StopLookup::Lenient`] stops that never appear add
/// nothing, which makes an unknown route or stop a zero-length trip.
pub fn distance_between<R: RouteRow>(
    rows: &[R],
    route_id: &str,
    start: &R::Stop,
    end: &R::Stop,
    lookup: StopLookup,
) -> Result<f64> {
    let (delta, seen_start, seen_end) = rows
        .iter()
        .filter(|row| row.route_id() == route_id)
        .filter_map(|row| {
            if row.is_stop(start) {
                Some(row.distance_km().map(|km| (-km, true, false)))
            } else if row.is_stop(end) {
                Some(row.distance_km().map(|km| (km, false, true)))
            } else {
                None
            }
        })
        .fold_ok(
            (0.0, false, false),
            |(delta, seen_start, seen_end), (km, is_start, is_end)| {
                (delta + km, seen_start || is_start, seen_end || is_end)
            },
        )?;

    for (seen, stop) in [(seen_start, start), (seen_end, end)] {
        if seen {
            continue;
        }
        match lookup {
            StopLookup::Strict => {
                return Err(FareError::NoStopOnRoute {
                    stop_id: stop.to_string(),
                    route_id: route_id.to_owned(),
                })
            }
            StopLookup::Lenient => {
                warn!(%stop, route = route_id, "Stop not found on route, counting it as zero")
            }
        }
    }

    let distance = f64::abs(delta);
    debug!(route = route_id, %start, %end, distance, "Computed trip distance");
    Ok(distance)
}

// Trips that change lines are measured on one line only.
pub fn line_for_trip<'a>(start: &'a str, end: &'a str) -> &'a str {
    let start_line = line_prefix(start);
    if start_line == line_prefix(end) || !INTERCHANGE_STATIONS.contains(&start) {
        start_line
    } else {
        line_prefix(end)
    }
}

fn line_prefix(station_id: &str) -> &str {
    station_id
        .char_indices()
        .nth(2)
        .map_or(station_id, |(idx, _)| &station_id[..idx])
}
