use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aspects::AspectConfig;
use crate::ephemeris::types::Body;

/// What to do when the requested house system is undefined at the location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarPolicy {
    /// Use equal houses and tag the chart with `PolarFallback`
    #[default]
    FallbackToEqual,
    /// Fail with `PolarLatitude`
    Strict,
}

/// Ephemeris tiers, tried in the configured order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EphemerisTier {
    Keplerian,
    MeanMotion,
}

impl EphemerisTier {
    pub fn name(&self) -> &'static str {
        match self {
            EphemerisTier::Keplerian => "keplerian",
            EphemerisTier::MeanMotion => "mean_motion",
        }
    }
}

impl fmt::Display for EphemerisTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EphemerisTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keplerian" => Ok(EphemerisTier::Keplerian),
            "mean_motion" => Ok(EphemerisTier::MeanMotion),
            other => Err(format!("unknown ephemeris tier '{}'", other)),
        }
    }
}

impl FromStr for PolarPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback_to_equal" => Ok(PolarPolicy::FallbackToEqual),
            "strict" => Ok(PolarPolicy::Strict),
            other => Err(format!("unknown polar policy '{}'", other)),
        }
    }
}

/// Everything a chart computation needs besides the instant and location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSettings {
    /// House system name; unknown names resolve to Placidus with a warning
    pub house_system: String,
    /// Bodies to place, in output order
    pub bodies: Vec<Body>,
    pub polar_policy: PolarPolicy,
    pub ephemeris: Vec<EphemerisTier>,
    pub aspects: AspectConfig,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_system: "placidus".to_string(),
            bodies: Body::PLANETS.to_vec(),
            polar_policy: PolarPolicy::default(),
            ephemeris: vec![EphemerisTier::Keplerian, EphemerisTier::MeanMotion],
            aspects: AspectConfig::default(),
        }
    }
}
