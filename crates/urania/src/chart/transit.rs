//! Transiting positions measured against a natal chart.

use rayon::prelude::*;
use serde::Serialize;

use crate::aspects::Aspect;
use crate::chart::assembler::ChartAssembler;
use crate::chart::data::{BodyPosition, Chart};
use crate::chart::settings::ChartSettings;
use crate::error::{ChartError, Warning};
use crate::time::Instant;

/// Sky at one instant, placed in the natal houses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitSnapshot {
    pub instant: Instant,
    /// Transiting bodies; `house` refers to the natal cusps
    pub positions: Vec<BodyPosition>,
    /// Transit-to-natal aspects, transiting body first
    pub aspects: Vec<Aspect>,
    pub warnings: Vec<Warning>,
}

impl ChartAssembler {
    /// Transits for one instant against `natal`.
    pub fn transits(&self, natal: &Chart, instant: Instant) -> Result<TransitSnapshot, ChartError> {
        let mut warnings = Vec::new();
        let positions = self.positions_in(instant.julian_day(), natal.houses(), &mut warnings)?;
        let aspects = self
            .calculator()
            .compute_cross_aspects(&positions, natal.positions());

        Ok(TransitSnapshot {
            instant,
            positions,
            aspects,
            warnings,
        })
    }
}

pub fn compute_transits(
    natal: &Chart,
    instant: Instant,
    settings: &ChartSettings,
) -> Result<TransitSnapshot, ChartError> {
    ChartAssembler::new(settings.clone()).transits(natal, instant)
}

/// One snapshot per day for `days` days from `start`, computed in parallel
/// and returned in day order.
pub fn scan_transits(
    natal: &Chart,
    start: Instant,
    days: u32,
    settings: &ChartSettings,
) -> Result<Vec<TransitSnapshot>, ChartError> {
    let assembler = ChartAssembler::new(settings.clone());
    log::debug!("Scanning {} days of transits from JD {}", days, start.julian_day());

    (0..days)
        .into_par_iter()
        .map(|day| {
            let instant = start.offset_days(day as f64)?;
            assembler.transits(natal, instant)
        })
        .collect()
}
