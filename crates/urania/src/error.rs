use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while computing a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Year {year} is outside the supported range {min}..={max}")]
    OutOfRangeInput { year: i32, min: i32, max: i32 },
    #[error("Invalid date/time: {message}")]
    InvalidDateTime { message: String },
    #[error("Invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },
    #[error("Unknown body: {body}")]
    UnknownBody { body: String },
    #[error("Ascendant/house cusps undefined at latitude {latitude}; use the equal house system")]
    PolarLatitude { latitude: f64 },
    #[error("Invalid aspect configuration: {message}")]
    InvalidAspectConfig { message: String },
    #[error("No ephemeris source configured")]
    NoEphemerisSource,
}

/// Non-fatal conditions attached to a computed chart.
///
/// Serialized as the bare variant name, e.g. `"LowPrecision"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warning {
    /// Kepler's equation did not fully converge for at least one body.
    LowPrecision,
    /// The requested house system was not recognized; Placidus was used.
    DefaultedHouseSystem,
    /// The location is too close to a pole for the requested house system;
    /// equal houses were used.
    PolarFallback,
    /// A body position came from a secondary ephemeris source.
    FallbackEphemeris,
}

impl Warning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Warning::LowPrecision => "LowPrecision",
            Warning::DefaultedHouseSystem => "DefaultedHouseSystem",
            Warning::PolarFallback => "PolarFallback",
            Warning::FallbackEphemeris => "FallbackEphemeris",
        }
    }
}

/// Push a warning unless it is already present, keeping first-seen order.
pub(crate) fn push_warning(warnings: &mut Vec<Warning>, warning: Warning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}
