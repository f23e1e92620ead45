use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::types::Body;
use crate::error::ChartError;

/// Angular relationships recognized between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    SemiSextile,
    SemiSquare,
    Quintile,
    Sesquiquadrate,
    Quincunx,
}

impl AspectKind {
    pub const ALL: [AspectKind; 10] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
        AspectKind::SemiSextile,
        AspectKind::SemiSquare,
        AspectKind::Quintile,
        AspectKind::Sesquiquadrate,
        AspectKind::Quincunx,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
            AspectKind::SemiSextile => "semisextile",
            AspectKind::SemiSquare => "semisquare",
            AspectKind::Quintile => "quintile",
            AspectKind::Sesquiquadrate => "sesquiquadrate",
            AspectKind::Quincunx => "quincunx",
        }
    }

    /// Exact angle of the aspect in degrees
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::SemiSquare => 45.0,
            AspectKind::Quintile => 72.0,
            AspectKind::Sesquiquadrate => 135.0,
            AspectKind::Quincunx => 150.0,
        }
    }

    pub fn is_major(&self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction
                | AspectKind::Sextile
                | AspectKind::Square
                | AspectKind::Trine
                | AspectKind::Opposition
        )
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();
        AspectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == id)
            .ok_or_else(|| ChartError::InvalidAspectConfig {
                message: format!("unknown aspect '{}'", s),
            })
    }
}

/// One row of an aspect table: which angle to look for and how much orb to allow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

impl AspectDefinition {
    /// Definition at the kind's standard angle.
    pub fn new(kind: AspectKind, orb: f64) -> Self {
        Self {
            kind,
            angle: kind.angle(),
            orb,
        }
    }
}

/// Ordered aspect table. Majors always precede minors; within each group the
/// caller's order is kept. The first matching definition wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectConfig {
    definitions: Vec<AspectDefinition>,
}

impl AspectConfig {
    pub fn new(mut definitions: Vec<AspectDefinition>) -> Result<Self, ChartError> {
        for definition in &definitions {
            if !definition.orb.is_finite() || definition.orb < 0.0 {
                return Err(ChartError::InvalidAspectConfig {
                    message: format!("orb {} for {} must be a non-negative number", definition.orb, definition.kind),
                });
            }
            if !definition.angle.is_finite() || !(0.0..=180.0).contains(&definition.angle) {
                return Err(ChartError::InvalidAspectConfig {
                    message: format!("angle {} for {} must be within 0..=180", definition.angle, definition.kind),
                });
            }
        }
        definitions.sort_by_key(|d| !d.kind.is_major());
        Ok(Self { definitions })
    }

    /// Major aspects plus the five common minor aspects.
    pub fn with_minor() -> Self {
        let mut definitions = Self::default().definitions;
        definitions.extend([
            AspectDefinition::new(AspectKind::SemiSextile, 2.0),
            AspectDefinition::new(AspectKind::SemiSquare, 2.0),
            AspectDefinition::new(AspectKind::Quintile, 2.0),
            AspectDefinition::new(AspectKind::Sesquiquadrate, 2.0),
            AspectDefinition::new(AspectKind::Quincunx, 3.0),
        ]);
        Self { definitions }
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn max_orb(&self) -> f64 {
        self.definitions.iter().map(|d| d.orb).fold(0.0, f64::max)
    }
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            definitions: vec![
                AspectDefinition::new(AspectKind::Conjunction, 8.0),
                AspectDefinition::new(AspectKind::Sextile, 4.0),
                AspectDefinition::new(AspectKind::Square, 6.0),
                AspectDefinition::new(AspectKind::Trine, 6.0),
                AspectDefinition::new(AspectKind::Opposition, 8.0),
            ],
        }
    }
}

/// An aspect found between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub body1: Body,
    pub body2: Body,
    pub kind: AspectKind,
    /// Exact angle of the matched definition
    pub angle: f64,
    /// Angular separation of the two bodies, [0, 180]
    pub separation: f64,
    /// |separation - angle|
    pub orb: f64,
    /// `None` when either body's speed is unknown
    pub applying: Option<bool>,
}
