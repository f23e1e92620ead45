//! Truncated solar and lunar theories.
//!
//! The Sun uses the mean longitude, a three-term equation of centre and the
//! radius vector of the eccentric Earth orbit. The Moon keeps the leading
//! periodic terms of the ELP-2000/82 series in longitude, latitude and
//! distance. Both return apparent longitudes of date.

use crate::angle::normalize_degrees;
use crate::sidereal::nutation;

use super::types::EclipticPosition;

const KM_PER_AU: f64 = 149_597_870.7;
const MOON_MEAN_DISTANCE_KM: f64 = 385_000.56;
/// Annual aberration of the Sun, 20.4898 arcseconds.
const SOLAR_ABERRATION: f64 = 0.00569;

/// One periodic term: multiples of D, M, M', F and its coefficient.
struct LunarTerm {
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    coefficient: f64,
}

const fn term(d: f64, m: f64, mp: f64, f: f64, coefficient: f64) -> LunarTerm {
    LunarTerm { d, m, mp, f, coefficient }
}

/// Longitude terms, degrees (sine series).
const LONGITUDE_TERMS: [LunarTerm; 10] = [
    term(0.0, 0.0, 1.0, 0.0, 6.288774),
    term(2.0, 0.0, -1.0, 0.0, 1.274027),
    term(2.0, 0.0, 0.0, 0.0, 0.658314),
    term(0.0, 0.0, 2.0, 0.0, 0.213618),
    term(0.0, 1.0, 0.0, 0.0, -0.185116),
    term(0.0, 0.0, 0.0, 2.0, -0.114332),
    term(2.0, 0.0, -2.0, 0.0, 0.058793),
    term(2.0, -1.0, -1.0, 0.0, 0.057066),
    term(2.0, 0.0, 1.0, 0.0, 0.053322),
    term(2.0, -1.0, 0.0, 0.0, 0.045758),
];

/// Latitude terms, degrees (sine series).
const LATITUDE_TERMS: [LunarTerm; 8] = [
    term(0.0, 0.0, 0.0, 1.0, 5.128122),
    term(0.0, 0.0, 1.0, 1.0, 0.280602),
    term(0.0, 0.0, 1.0, -1.0, 0.277693),
    term(2.0, 0.0, 0.0, -1.0, 0.173237),
    term(2.0, 0.0, -1.0, 1.0, 0.055413),
    term(2.0, 0.0, -1.0, -1.0, 0.046271),
    term(2.0, 0.0, 0.0, 1.0, 0.032573),
    term(0.0, 0.0, 2.0, 1.0, 0.017198),
];

/// Distance terms, kilometres (cosine series).
const DISTANCE_TERMS: [LunarTerm; 10] = [
    term(0.0, 0.0, 1.0, 0.0, -20905.355),
    term(2.0, 0.0, -1.0, 0.0, -3699.111),
    term(2.0, 0.0, 0.0, 0.0, -2955.968),
    term(0.0, 0.0, 2.0, 0.0, -569.925),
    term(0.0, 1.0, 0.0, 0.0, 48.888),
    term(0.0, 0.0, 0.0, 2.0, -3.149),
    term(2.0, 0.0, -2.0, 0.0, 246.158),
    term(2.0, -1.0, -1.0, 0.0, -152.138),
    term(2.0, 0.0, 1.0, 0.0, -170.733),
    term(2.0, -1.0, 0.0, 0.0, -204.586),
];

/// Fundamental lunar arguments in radians.
struct LunarArguments {
    elongation: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    latitude_argument: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        Self {
            elongation: (297.8501921 + 445267.1114034 * t - 0.0018819 * t2).to_radians(),
            sun_anomaly: (357.5291092 + 35999.0502909 * t - 0.0001536 * t2).to_radians(),
            moon_anomaly: (134.9633964 + 477198.8675055 * t + 0.0087414 * t2).to_radians(),
            latitude_argument: (93.2720950 + 483202.0175233 * t - 0.0036539 * t2).to_radians(),
        }
    }

    fn angle(&self, term: &LunarTerm) -> f64 {
        term.d * self.elongation
            + term.m * self.sun_anomaly
            + term.mp * self.moon_anomaly
            + term.f * self.latitude_argument
    }

    fn sine_series(&self, terms: &[LunarTerm]) -> f64 {
        terms.iter().map(|t| t.coefficient * self.angle(t).sin()).sum()
    }

    fn cosine_series(&self, terms: &[LunarTerm]) -> f64 {
        terms.iter().map(|t| t.coefficient * self.angle(t).cos()).sum()
    }
}

/// Geometric mean longitude of the Sun, degrees (not normalized).
pub fn sun_mean_longitude(t: f64) -> f64 {
    280.46646 + 36000.76983 * t + 0.0003032 * t * t
}

/// Apparent geocentric position of the Sun.
pub fn sun_position(t: f64) -> EclipticPosition {
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let eccentricity = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let centre = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();

    let true_longitude = sun_mean_longitude(t) + centre;
    let true_anomaly = mean_anomaly + centre.to_radians();
    let distance =
        1.000001018 * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * true_anomaly.cos());

    EclipticPosition {
        longitude: normalize_degrees(true_longitude + nutation(t).longitude - SOLAR_ABERRATION),
        latitude: 0.0,
        distance,
        low_precision: false,
    }
}

/// Mean longitude of the Moon, degrees (not normalized).
pub fn moon_mean_longitude(t: f64) -> f64 {
    218.3164477 + 481267.88123421 * t - 0.0015786 * t * t
}

/// Apparent geocentric position of the Moon.
pub fn moon_position(t: f64) -> EclipticPosition {
    let args = LunarArguments::at(t);

    let longitude = moon_mean_longitude(t) + args.sine_series(&LONGITUDE_TERMS);
    let latitude = args.sine_series(&LATITUDE_TERMS);
    let distance_km = MOON_MEAN_DISTANCE_KM + args.cosine_series(&DISTANCE_TERMS);

    EclipticPosition {
        longitude: normalize_degrees(longitude + nutation(t).longitude),
        latitude,
        distance: distance_km / KM_PER_AU,
        low_precision: false,
    }
}

/// Longitude of the Moon's mean ascending node, degrees in [0, 360).
pub fn mean_lunar_node(t: f64) -> f64 {
    let t2 = t * t;
    normalize_degrees(125.04452 - 1934.136261 * t + 0.0020708 * t2 + t2 * t / 450000.0)
}

/// Mean ascending (north) node as an ecliptic point. Distance is not
/// meaningful for a node and is reported as zero.
pub fn north_node_position(t: f64) -> EclipticPosition {
    EclipticPosition {
        longitude: mean_lunar_node(t),
        latitude: 0.0,
        distance: 0.0,
        low_precision: false,
    }
}

/// Mean descending (south) node, opposite the north node.
pub fn south_node_position(t: f64) -> EclipticPosition {
    EclipticPosition {
        longitude: normalize_degrees(mean_lunar_node(t) + 180.0),
        ..north_node_position(t)
    }
}
