use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Obliquity used for the polar circle test, degrees.
pub const POLAR_CIRCLE_OBLIQUITY: f64 = 23.44;

/// Latitude at and beyond which quadrant house systems are undefined.
pub const POLAR_CIRCLE_LATITUDE: f64 = 90.0 - POLAR_CIRCLE_OBLIQUITY;

/// Supported house division systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Quadrant arcs between the angles trisected on the ecliptic
    #[default]
    Placidus,
    /// Each house spans exactly 30 degrees from the ascendant
    Equal,
    /// Quadrant system, computed with the same trisection as Placidus
    Koch,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 3] = [HouseSystem::Placidus, HouseSystem::Equal, HouseSystem::Koch];

    pub fn name(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::Equal => "equal",
            HouseSystem::Koch => "koch",
        }
    }

    /// Whether cusps depend on geographic latitude (and so fail near the poles).
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    /// Parse a name, falling back to Placidus. The flag is `true` when the
    /// fallback was taken.
    pub fn resolve(name: &str) -> (HouseSystem, bool) {
        match name.parse::<HouseSystem>() {
            Ok(system) => (system, false),
            Err(_) => (HouseSystem::Placidus, true),
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a house system name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHouseSystem(pub String);

impl fmt::Display for UnknownHouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown house system: {}", self.0)
    }
}

impl std::error::Error for UnknownHouseSystem {}

impl FromStr for HouseSystem {
    type Err = UnknownHouseSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        HouseSystem::ALL
            .iter()
            .copied()
            .find(|system| system.name() == id)
            .ok_or_else(|| UnknownHouseSystem(s.to_string()))
    }
}

/// Twelve cusp longitudes, index 0 = house 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    /// The system actually used, after any fallback
    pub system: HouseSystem,
    pub cusps: [f64; 12],
}

impl HouseCusps {
    /// Cusp of a 1-based house number.
    pub fn cusp(&self, house: u8) -> Option<f64> {
        match house {
            1..=12 => Some(self.cusps[(house - 1) as usize]),
            _ => None,
        }
    }
}

/// The four chart angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub ic: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!(" EQUAL".parse::<HouseSystem>().unwrap(), HouseSystem::Equal);
        assert_eq!("koch".parse::<HouseSystem>().unwrap(), HouseSystem::Koch);
        assert!("whole_sign".parse::<HouseSystem>().is_err());
    }

    #[test]
    fn test_resolve_defaults_to_placidus() {
        assert_eq!(HouseSystem::resolve("equal"), (HouseSystem::Equal, false));
        assert_eq!(HouseSystem::resolve("regiomontanus"), (HouseSystem::Placidus, true));
        assert_eq!(HouseSystem::resolve(""), (HouseSystem::Placidus, true));
    }

    #[test]
    fn test_latitude_dependence() {
        assert!(HouseSystem::Placidus.latitude_dependent());
        assert!(HouseSystem::Koch.latitude_dependent());
        assert!(!HouseSystem::Equal.latitude_dependent());
        assert!((POLAR_CIRCLE_LATITUDE - 66.56).abs() < 1e-9);
    }
}
