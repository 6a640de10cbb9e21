use std::fmt;

use tracing::info;

use crate::{
    config::Config,
    error::Result,
    fare::{resolve_fare, Fare},
    route::{distance_between, line_for_trip},
    tables::{load_table, BusStop, FareBand, Station},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareQuote {
    pub distance_km: f64,
    pub fare: Option<Fare>,
}

impl FareQuote {
    pub fn distance_line(&self) -> String {
        format!("Distance travelled: {}km", one_decimal(self.distance_km))
    }

    pub fn fare_line(&self) -> String {
        match self.fare {
            Some(fare) => format!("Fare: {fare}"),
            None => "Fare: Fare not found".to_owned(),
        }
    }
}

impl fmt::Display for FareQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.distance_line())?;
        write!(f, "{}", self.fare_line())
    }
}

// Exact halves round up. Only an odd number of quarters is an exact half
// at one decimal place.
fn one_decimal(km: f64) -> String {
    let quarters = km * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (km * 10.0 + 0.5).floor() / 10.0)
    } else {
        format!("{km:.1}")
    }
}

/// Tables are read again for every trip; nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct FareCalculator {
    config: Config,
}

impl FareCalculator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bus_fare(&self, service_no: &str, start: i64, end: i64) -> Result<FareQuote> {
        let fares: Vec<FareBand> = load_table(self.config.fares_path())?;
        let stops: Vec<BusStop> = load_table(self.config.bus_routes_path())?;

        let distance_km =
            distance_between(&stops, service_no, &start, &end, self.config.stop_lookup)?;
        let quote = FareQuote {
            distance_km,
            fare: resolve_fare(&fares, distance_km)?,
        };

        info!(
            service_no,
            start,
            end,
            distance_km,
            fare_cents = ?quote.fare.map(Fare::cents),
            "Priced bus trip"
        );
        Ok(quote)
    }

    pub fn mrt_fare(&self, start: &str, end: &str) -> Result<FareQuote> {
        let fares: Vec<FareBand> = load_table(self.config.fares_path())?;
        let stations: Vec<Station> = load_table(self.config.mrt_routes_path())?;

        let line = line_for_trip(start, end);
        let distance_km = distance_between(&stations, line, start, end, self.config.stop_lookup)?;
        let quote = FareQuote {
            distance_km,
            fare: resolve_fare(&fares, distance_km)?,
        };

        info!(
            line,
            start,
            end,
            distance_km,
            fare_cents = ?quote.fare.map(Fare::cents),
            "Priced MRT trip"
        );
        Ok(quote)
    }
}
