//! Computed chart types and their stable JSON shape.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::aspects::{Aspect, AspectKind};
use crate::ephemeris::types::{Body, GeoLocation};
use crate::error::Warning;
use crate::houses::{ChartAngles, HouseCusps};
use crate::time::Instant;
use crate::western::signs::{degree_in_sign, sign_of, ZodiacSign};

/// A body placed in the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude of date, [0, 360)
    pub longitude: f64,
    pub latitude: f64,
    /// Geocentric distance in AU (zero for the lunar nodes)
    pub distance: f64,
    /// Degrees per day
    pub speed: Option<f64>,
    pub retrograde: bool,
    pub sign: ZodiacSign,
    /// [0, 30)
    pub degree: f64,
    /// 1-12
    pub house: u8,
}

/// A sensitive point of the chart (angle or cusp) with its sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnglePoint {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
}

impl AnglePoint {
    pub fn from_longitude(longitude: f64) -> Self {
        Self {
            longitude,
            sign: sign_of(longitude),
            degree: degree_in_sign(longitude),
        }
    }
}

/// A complete natal chart. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    instant: Instant,
    location: GeoLocation,
    houses: HouseCusps,
    angles: ChartAngles,
    positions: Vec<BodyPosition>,
    aspects: Vec<Aspect>,
    warnings: Vec<Warning>,
    sidereal_time: f64,
    obliquity: f64,
}

impl Chart {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        instant: Instant,
        location: GeoLocation,
        houses: HouseCusps,
        angles: ChartAngles,
        positions: Vec<BodyPosition>,
        aspects: Vec<Aspect>,
        warnings: Vec<Warning>,
        sidereal_time: f64,
        obliquity: f64,
    ) -> Self {
        Self {
            instant,
            location,
            houses,
            angles,
            positions,
            aspects,
            warnings,
            sidereal_time,
            obliquity,
        }
    }

    pub fn instant(&self) -> &Instant {
        &self.instant
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn houses(&self) -> &HouseCusps {
        &self.houses
    }

    pub fn angles(&self) -> &ChartAngles {
        &self.angles
    }

    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Local apparent sidereal time, degrees
    pub fn sidereal_time(&self) -> f64 {
        self.sidereal_time
    }

    /// True obliquity of the ecliptic, degrees
    pub fn obliquity(&self) -> f64 {
        self.obliquity
    }

    pub fn to_payload(&self) -> ChartPayload {
        let planets = self
            .positions
            .iter()
            .map(|p| {
                (
                    p.body.id(),
                    PlanetEntry {
                        longitude: p.longitude,
                        latitude: p.latitude,
                        distance: p.distance,
                        speed: p.speed,
                        retrograde: p.retrograde,
                        sign: p.sign,
                        degree: p.degree,
                        house: p.house,
                    },
                )
            })
            .collect();

        let houses = self
            .houses
            .cusps
            .iter()
            .enumerate()
            .map(|(i, &cusp)| {
                let point = AnglePoint::from_longitude(cusp);
                (
                    (i + 1) as u8,
                    HouseEntry {
                        cusp,
                        sign: point.sign,
                        degree: point.degree,
                    },
                )
            })
            .collect();

        ChartPayload {
            planets,
            houses,
            angles: AnglesEntry {
                ascendant: AnglePoint::from_longitude(self.angles.ascendant),
                midheaven: AnglePoint::from_longitude(self.angles.midheaven),
                descendant: AnglePoint::from_longitude(self.angles.descendant),
                ic: AnglePoint::from_longitude(self.angles.ic),
            },
            aspects: self.aspects.iter().map(AspectEntry::from).collect(),
            warnings: self.warnings.iter().map(|w| w.as_str()).collect(),
            house_system: self.houses.system.name(),
            julian_day: self.instant.julian_day(),
            datetime: self.instant.datetime(),
            location: self.location,
            sidereal_time: self.sidereal_time,
            obliquity: self.obliquity,
        }
    }
}

impl Serialize for Chart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_payload().serialize(serializer)
    }
}

/// Serialized form of a [`Chart`]
#[derive(Debug, Clone, Serialize)]
pub struct ChartPayload {
    pub planets: BTreeMap<&'static str, PlanetEntry>,
    /// Keyed "1".."12"
    pub houses: BTreeMap<u8, HouseEntry>,
    pub angles: AnglesEntry,
    pub aspects: Vec<AspectEntry>,
    pub warnings: Vec<&'static str>,
    pub house_system: &'static str,
    pub julian_day: f64,
    pub datetime: DateTime<Utc>,
    pub location: GeoLocation,
    pub sidereal_time: f64,
    pub obliquity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetEntry {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub speed: Option<f64>,
    pub retrograde: bool,
    pub sign: ZodiacSign,
    pub degree: f64,
    pub house: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseEntry {
    pub cusp: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnglesEntry {
    pub ascendant: AnglePoint,
    pub midheaven: AnglePoint,
    pub descendant: AnglePoint,
    pub ic: AnglePoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct AspectEntry {
    pub body1: Body,
    pub body2: Body,
    pub aspect: AspectKind,
    pub orb: f64,
    pub separation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applying: Option<bool>,
}

impl From<&Aspect> for AspectEntry {
    fn from(aspect: &Aspect) -> Self {
        Self {
            body1: aspect.body1,
            body2: aspect.body2,
            aspect: aspect.kind,
            orb: aspect.orb,
            separation: aspect.separation,
            applying: aspect.applying,
        }
    }
}
