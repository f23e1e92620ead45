use crate::angle::signed_delta;
use crate::error::ChartError;

use super::types::{Body, EclipticPosition};

/// Half-width of the central difference used for daily motion, in days.
const SPEED_HALF_STEP: f64 = 0.5;

/// A strategy that can place a body on the ecliptic of date.
pub trait EphemerisSource: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Apparent geocentric position of `body` at a Julian Day (UT).
    fn position(&self, body: Body, julian_day: f64) -> Result<EclipticPosition, ChartError>;
}

/// A position together with its daily motion and the source that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    pub position: EclipticPosition,
    /// Degrees per day; `None` when a neighbouring sample could not be computed
    pub speed: Option<f64>,
    /// Index into the chain of the source that answered
    pub source_index: usize,
}

impl ResolvedPosition {
    pub fn is_fallback(&self) -> bool {
        self.source_index > 0
    }
}

/// Ordered list of ephemeris sources; the first that answers wins.
pub struct EphemerisChain {
    sources: Vec<Box<dyn EphemerisSource>>,
}

impl EphemerisChain {
    pub fn new(sources: Vec<Box<dyn EphemerisSource>>) -> Self {
        Self { sources }
    }

    pub fn push(&mut self, source: Box<dyn EphemerisSource>) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Try each source in order. Returns the position and the index of the
    /// source that produced it, or the last error if every source failed.
    pub fn position(
        &self,
        body: Body,
        julian_day: f64,
    ) -> Result<(EclipticPosition, usize), ChartError> {
        let mut last_error = ChartError::NoEphemerisSource;
        for (index, source) in self.sources.iter().enumerate() {
            match source.position(body, julian_day) {
                Ok(position) => {
                    if index > 0 {
                        log::warn!(
                            "{} answered for {} at JD {} after {} earlier source(s) failed",
                            source.name(),
                            body,
                            julian_day,
                            index
                        );
                    }
                    return Ok((position, index));
                }
                Err(err) => {
                    log::debug!("{} failed for {}: {}", source.name(), body, err);
                    last_error = err;
                }
            }
        }
        Err(last_error)
    }

    /// Position plus daily motion from a central difference over one day.
    pub fn resolve(&self, body: Body, julian_day: f64) -> Result<ResolvedPosition, ChartError> {
        let (position, source_index) = self.position(body, julian_day)?;

        let before = self.position(body, julian_day - SPEED_HALF_STEP);
        let after = self.position(body, julian_day + SPEED_HALF_STEP);
        let speed = match (before, after) {
            (Ok((before, _)), Ok((after, _))) => Some(
                signed_delta(before.longitude, after.longitude) / (2.0 * SPEED_HALF_STEP),
            ),
            _ => None,
        };

        Ok(ResolvedPosition {
            position,
            speed,
            source_index,
        })
    }
}
