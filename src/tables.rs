//! Reference tables as they appear on disk.
//!
//! Every cell is kept as the raw string from the file. Values are coerced
//! where they are used, so a table only fails to load when a row is missing
//! one of its declared columns.

use std::{collections::HashMap, fs::File, path::Path};

use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use crate::error::{FareError, Result};

pub const BUS_ROUTES_FILE: &str = "bus_routes_2023.csv";
pub const MRT_ROUTES_FILE: &str = "mrt_routes_2023.csv";
pub const FARES_FILE: &str = "transformed_fare_2023.csv";

pub type RawRow = HashMap<String, String>;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BusStop {
    #[serde(rename = "ServiceNo")]
    pub service_no: String,
    #[serde(rename = "BusStopCode")]
    pub bus_stop_code: String,
    #[serde(rename = "Distance")]
    pub distance: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Station {
    #[serde(rename = "stationLine")]
    pub station_line: String,
    #[serde(rename = "stationId")]
    pub station_id: String,
    #[serde(rename = "Distance")]
    pub distance: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FareBand {
    pub applicable_time: String,
    pub fare_type: String,
    #[serde(rename = "Min")]
    pub min: String,
    #[serde(rename = "Max")]
    pub max: String,
    pub fare_per_ride: String,
}

pub fn load_table<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FareError::Io {
        path: path.to_owned(),
        source,
    })?;

    let rows = csv::Reader::from_reader(file)
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|source| FareError::Format {
            path: path.to_owned(),
            source,
        })?;

    debug!(path = %path.display(), rows = rows.len(), "Loaded reference table");
    Ok(rows)
}
