use crate::angle::{angular_separation, signed_delta};
use crate::aspects::types::{Aspect, AspectConfig, AspectDefinition};
use crate::chart::data::BodyPosition;

/// Aspect calculator over a fixed aspect table
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    config: AspectConfig,
}

impl AspectCalculator {
    pub fn new(config: AspectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AspectConfig {
        &self.config
    }

    /// Aspects between every unordered pair of bodies in one chart.
    ///
    /// `body1` precedes `body2` in body order; results are sorted by pair.
    pub fn compute_aspects(&self, positions: &[BodyPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let (first, second) = if positions[i].body <= positions[j].body {
                    (&positions[i], &positions[j])
                } else {
                    (&positions[j], &positions[i])
                };
                if first.body == second.body {
                    continue;
                }
                if let Some(aspect) = self.aspect_between(first, second) {
                    aspects.push(aspect);
                }
            }
        }
        sort_by_pair(&mut aspects);
        aspects
    }

    /// Aspects from each body in `moving` to each body in `fixed` (for
    /// example transits to a natal chart). `body1` is always from `moving`.
    /// The same body in both lists is a return and is compared like any pair.
    pub fn compute_cross_aspects(&self, moving: &[BodyPosition], fixed: &[BodyPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for a in moving {
            for b in fixed {
                if let Some(aspect) = self.aspect_between(a, b) {
                    aspects.push(aspect);
                }
            }
        }
        sort_by_pair(&mut aspects);
        aspects
    }

    fn aspect_between(&self, a: &BodyPosition, b: &BodyPosition) -> Option<Aspect> {
        let (definition, separation) = self.match_definition(a.longitude, b.longitude)?;
        Some(Aspect {
            body1: a.body,
            body2: b.body,
            kind: definition.kind,
            angle: definition.angle,
            separation,
            orb: (separation - definition.angle).abs(),
            applying: is_applying(a.longitude, b.longitude, a.speed, b.speed, definition.angle),
        })
    }

    /// First definition whose angle is within orb of the separation.
    pub fn match_definition(&self, lon1: f64, lon2: f64) -> Option<(AspectDefinition, f64)> {
        let separation = angular_separation(lon1, lon2);
        self.config
            .definitions()
            .iter()
            .find(|d| (separation - d.angle).abs() <= d.orb)
            .map(|d| (*d, separation))
    }
}

/// Whether the separation is moving toward the aspect angle.
///
/// Uses the instantaneous rate of change of the separation from the two
/// daily motions. An exact aspect counts as separating.
pub fn is_applying(
    lon1: f64,
    lon2: f64,
    speed1: Option<f64>,
    speed2: Option<f64>,
    aspect_angle: f64,
) -> Option<bool> {
    let relative_speed = speed1? - speed2?;

    let signed = signed_delta(lon2, lon1);
    let separation = signed.abs();
    let direction = if signed > 0.0 && separation < 180.0 {
        1.0
    } else if signed < 0.0 {
        -1.0
    } else {
        // exactly conjunct or opposed: separation can only move one way
        if separation == 0.0 {
            return Some(aspect_angle > 0.0 && relative_speed != 0.0);
        }
        return Some(aspect_angle < 180.0 && relative_speed != 0.0);
    };
    let separation_rate = direction * relative_speed;
    let deviation = separation - aspect_angle;

    Some(deviation * separation_rate < 0.0)
}

fn sort_by_pair(aspects: &mut [Aspect]) {
    aspects.sort_by_key(|a| (a.body1, a.body2));
}
