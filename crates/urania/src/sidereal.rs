//! Sidereal time, first-order nutation and the obliquity of the ecliptic.

use serde::Serialize;

use crate::angle::normalize_degrees;
use crate::ephemeris::lunisolar::mean_lunar_node;
use crate::time::{centuries_since_j2000, J2000_JD};

const ARCSEC: f64 = 1.0 / 3600.0;

/// Nutation in longitude (Δψ) and obliquity (Δε), in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub longitude: f64,
    pub obliquity: f64,
}

/// Four-term nutation driven by the lunar node and the mean longitudes of
/// the Sun and Moon. Good to about half an arcsecond.
pub fn nutation(t: f64) -> Nutation {
    let node = mean_lunar_node(t).to_radians();
    let sun = (280.4665 + 36000.7698 * t).to_radians();
    let moon = (218.3165 + 481267.8813 * t).to_radians();

    let longitude = -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * node).sin();
    let obliquity = 9.20 * node.cos() + 0.57 * (2.0 * sun).cos() + 0.10 * (2.0 * moon).cos()
        - 0.09 * (2.0 * node).cos();

    Nutation {
        longitude: longitude * ARCSEC,
        obliquity: obliquity * ARCSEC,
    }
}

/// General precession in longitude from J2000 to date, degrees (first order).
pub fn precession_in_longitude(t: f64) -> f64 {
    (5029.0966 * t + 1.11 * t * t) * ARCSEC
}

/// Mean obliquity of the ecliptic (IAU 1980), degrees.
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn greenwich_mean_sidereal_time(julian_day: f64) -> f64 {
    let t = centuries_since_j2000(julian_day);
    let gmst = 280.46061837 + 360.98564736629 * (julian_day - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_degrees(gmst)
}

/// Sidereal time and the Earth orientation quantities derived with it.
/// All values in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiderealTime {
    pub gmst: f64,
    pub gast: f64,
    /// Local apparent sidereal time
    pub lst: f64,
    pub nutation_longitude: f64,
    pub nutation_obliquity: f64,
    pub mean_obliquity: f64,
    pub true_obliquity: f64,
}

impl SiderealTime {
    /// Compute for a Julian Day (UT) and an east-positive geographic longitude.
    pub fn compute(julian_day: f64, longitude: f64) -> Self {
        let t = centuries_since_j2000(julian_day);
        let nutation = nutation(t);
        let mean_obliquity = mean_obliquity(t);
        let true_obliquity = mean_obliquity + nutation.obliquity;

        let gmst = greenwich_mean_sidereal_time(julian_day);
        let gast = normalize_degrees(gmst + nutation.longitude * true_obliquity.to_radians().cos());
        let lst = normalize_degrees(gast + longitude);

        Self {
            gmst,
            gast,
            lst,
            nutation_longitude: nutation.longitude,
            nutation_obliquity: nutation.obliquity,
            mean_obliquity,
            true_obliquity,
        }
    }
}
