use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FareError>;

#[derive(Error, Debug)]
pub enum FareError {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed row in {path:?}: {source}")]
    Format { path: PathBuf, source: csv::Error },

    #[error("Column {column:?} holds {value:?}, which is not a valid {expected}")]
    InvalidValue {
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Could not parse {input:?} as a {expected}")]
    InvalidInput {
        input: String,
        expected: &'static str,
    },

    #[error("No such Stop {stop_id:?} on Route {route_id:?}")]
    NoStopOnRoute { stop_id: String, route_id: String },

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FareError::NoStopOnRoute {
            stop_id: "1012".into(),
            route_id: "2".into(),
        };
        assert_eq!(err.to_string(), r#"No such Stop "1012" on Route "2""#);

        let err = FareError::InvalidInput {
            input: "abc".into(),
            expected: "bus stop code",
        };
        assert_eq!(err.to_string(), r#"Could not parse "abc" as a bus stop code"#);

        let err = FareError::InvalidValue {
            column: "Distance",
            value: "n/a".into(),
            expected: "distance in km",
        };
        assert_eq!(
            err.to_string(),
            r#"Column "Distance" holds "n/a", which is not a valid distance in km"#
        );
    }
}
