//! Numeric chart summaries: elemental balance, stelliums, how the planets
//! spread around the wheel, the chart ruler and the lunar phase.

use serde::Serialize;

use crate::angle::forward_arc;
use crate::chart::data::{BodyPosition, Chart};
use crate::ephemeris::types::Body;

use super::signs::{sign_of, Element, Modality, ZodiacSign};

/// Bodies needed in one sign to call it a stellium.
pub const STELLIUM_SIZE: usize = 3;

/// Overall shape of the planets around the wheel, by occupied arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionPattern {
    /// Within 120 degrees
    Bundle,
    /// Within 180 degrees
    Bowl,
    Scattered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub element_counts: [(Element, usize); 4],
    pub modality_counts: [(Modality, usize); 3],
    pub dominant_element: Option<Element>,
    pub dominant_modality: Option<Modality>,
    /// First sign in zodiac order holding at least [`STELLIUM_SIZE`] bodies
    pub stellium: Option<ZodiacSign>,
    /// 360 minus the widest empty gap, degrees
    pub occupied_arc: f64,
    pub pattern: DistributionPattern,
    /// Modern ruler of the ascendant's sign
    pub chart_ruler: Body,
    /// Illuminated fraction from the Sun-Moon elongation: 0 new, 1 full.
    /// `None` unless the chart holds both the Sun and the Moon.
    pub moon_phase: Option<f64>,
}

/// Summarize a chart. Balance, stellium and pattern count the planets
/// (Sun through Pluto) only; the lunar nodes are ignored.
pub fn summarize(chart: &Chart) -> ChartSummary {
    summarize_positions(chart.positions(), chart.angles().ascendant)
}

/// `(1 - cos D) / 2` for the Moon's elongation `D` east of the Sun.
pub fn moon_phase(sun_longitude: f64, moon_longitude: f64) -> f64 {
    let elongation = forward_arc(sun_longitude, moon_longitude);
    (1.0 - elongation.to_radians().cos()) / 2.0
}

fn summarize_positions(positions: &[BodyPosition], ascendant: f64) -> ChartSummary {
    let planets: Vec<&BodyPosition> = positions
        .iter()
        .filter(|p| Body::PLANETS.contains(&p.body))
        .collect();

    let element_counts = Element::ALL.map(|e| (e, planets.iter().filter(|p| p.sign.element() == e).count()));
    let modality_counts =
        Modality::ALL.map(|m| (m, planets.iter().filter(|p| p.sign.modality() == m).count()));

    let stellium = ZodiacSign::ALL
        .iter()
        .copied()
        .find(|&sign| planets.iter().filter(|p| p.sign == sign).count() >= STELLIUM_SIZE);

    let mut longitudes: Vec<f64> = planets.iter().map(|p| p.longitude).collect();
    let occupied_arc = occupied_arc(&mut longitudes);
    let pattern = if occupied_arc <= 120.0 {
        DistributionPattern::Bundle
    } else if occupied_arc <= 180.0 {
        DistributionPattern::Bowl
    } else {
        DistributionPattern::Scattered
    };

    ChartSummary {
        dominant_element: dominant(&element_counts),
        dominant_modality: dominant(&modality_counts),
        element_counts,
        modality_counts,
        stellium,
        occupied_arc,
        pattern,
        chart_ruler: sign_of(ascendant).ruler(true),
        moon_phase: longitude_of(positions, Body::Sun)
            .zip(longitude_of(positions, Body::Moon))
            .map(|(sun, moon)| moon_phase(sun, moon)),
    }
}

fn longitude_of(positions: &[BodyPosition], body: Body) -> Option<f64> {
    positions.iter().find(|p| p.body == body).map(|p| p.longitude)
}

/// Highest count wins; ties go to the earlier entry. `None` when all are zero.
fn dominant<T: Copy>(counts: &[(T, usize)]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for &(item, count) in counts {
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| item)
}

fn occupied_arc(longitudes: &mut [f64]) -> f64 {
    if longitudes.len() < 2 {
        return 0.0;
    }
    longitudes.sort_by(|a, b| a.total_cmp(b));

    let n = longitudes.len();
    let widest_gap = (0..n)
        .map(|i| forward_arc(longitudes[i], longitudes[(i + 1) % n]))
        .fold(0.0, f64::max);
    360.0 - widest_gap
}
