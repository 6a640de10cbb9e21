//! Distance-based fare calculation for bus and MRT trips.
//!
//! A trip's distance is the difference between the cumulative distances of
//! its boarding and alighting stops in a route table. That distance is
//! looked up in a table of fare bands to find the adult card fare.

pub mod calculator;
pub mod config;
pub mod error;
pub mod fare;
pub mod route;
pub mod session;
pub mod tables;

pub use calculator::{FareCalculator, FareQuote};
pub use config::{Config, Mode};
pub use error::{FareError, Result};
pub use fare::{resolve_fare, Fare};
pub use route::{distance_between, line_for_trip, RouteRow, StopLookup};
pub use session::Session;
pub use tables::{load_table, BusStop, FareBand, RawRow, Station};
