//! Runtime configuration, read from the environment.

use std::path::{Path, PathBuf};

use crate::{
    error::{FareError, Result},
    route::StopLookup,
    tables::{BUS_ROUTES_FILE, FARES_FILE, MRT_ROUTES_FILE},
};

pub const DATA_DIR_VAR: &str = "FARE_DATA_DIR";
pub const MODE_VAR: &str = "FARE_MODE";
pub const STRICT_STOPS_VAR: &str = "FARE_STRICT_STOPS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Bus,
    Mrt,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub mode: Mode,
    pub stop_lookup: StopLookup,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>, mode: Mode, stop_lookup: StopLookup) -> Self {
        Self {
            data_dir: data_dir.into(),
            mode,
            stop_lookup,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(mode) = lookup(MODE_VAR) {
            config.mode = match mode.trim().to_ascii_lowercase().as_str() {
                "" | "bus" => Mode::Bus,
                "mrt" => Mode::Mrt,
                _ => {
                    return Err(FareError::InvalidConfig {
                        key: MODE_VAR,
                        value: mode,
                    })
                }
            };
        }

        if let Some(strict) = lookup(STRICT_STOPS_VAR) {
            config.stop_lookup = match strict.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" => StopLookup::Lenient,
                "1" | "true" | "yes" => StopLookup::Strict,
                _ => {
                    return Err(FareError::InvalidConfig {
                        key: STRICT_STOPS_VAR,
                        value: strict,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn bus_routes_path(&self) -> PathBuf {
        self.data_dir.join(BUS_ROUTES_FILE)
    }

    pub fn mrt_routes_path(&self) -> PathBuf {
        self.data_dir.join(MRT_ROUTES_FILE)
    }

    pub fn fares_path(&self) -> PathBuf {
        self.data_dir.join(FARES_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            mode: Mode::Bus,
            stop_lookup: StopLookup::Lenient,
        }
    }
}
