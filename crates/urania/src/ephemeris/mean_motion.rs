//! Coarse fallback ephemeris.
//!
//! Mean longitude plus a two-term equation of centre, with every orbit laid in
//! the ecliptic plane. No Kepler iteration, so it always answers; accuracy is
//! in the order of a degree for the planets.

use crate::angle::normalize_degrees;
use crate::error::ChartError;
use crate::sidereal::{nutation, precession_in_longitude};
use crate::time::centuries_since_j2000;

use super::adapter::EphemerisSource;
use super::elements::{orbital_elements, OrbitalElements, EARTH_MOON_BARYCENTER};
use super::lunisolar;
use super::types::{Body, EclipticPosition};

const KM_PER_AU: f64 = 149_597_870.7;

/// Heliocentric longitude (degrees, J2000) and radius (AU) on a flattened orbit.
fn planar_orbit(elements: &OrbitalElements, t: f64) -> (f64, f64) {
    let set = elements.at(t);
    let e = set.eccentricity;
    let m = set.mean_anomaly().to_radians();

    let centre = 2.0 * e * m.sin() + 1.25 * e * e * (2.0 * m).sin();
    let nu = m + centre;
    let radius = set.semi_major_axis * (1.0 - e * e) / (1.0 + e * nu.cos());

    (set.mean_longitude + centre.to_degrees(), radius)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionEphemeris;

impl MeanMotionEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisSource for MeanMotionEphemeris {
    fn name(&self) -> &str {
        "mean_motion"
    }

    fn position(&self, body: Body, julian_day: f64) -> Result<EclipticPosition, ChartError> {
        let t = centuries_since_j2000(julian_day);
        let to_date = precession_in_longitude(t) + nutation(t).longitude;
        let (earth_lon, earth_r) = planar_orbit(&EARTH_MOON_BARYCENTER, t);

        let (longitude, distance) = match body {
            Body::Sun => (earth_lon + 180.0 + to_date, earth_r),
            Body::Moon => {
                let anomaly = (134.9633964 + 477198.8675055 * t).to_radians();
                let longitude = lunisolar::moon_mean_longitude(t)
                    + 6.288774 * anomaly.sin()
                    + 0.213618 * (2.0 * anomaly).sin();
                let distance = (385_000.56 - 20_905.355 * anomaly.cos()) / KM_PER_AU;
                (longitude + nutation(t).longitude, distance)
            }
            Body::NorthNode => return Ok(lunisolar::north_node_position(t)),
            Body::SouthNode => return Ok(lunisolar::south_node_position(t)),
            _ => {
                let elements = orbital_elements(body).ok_or_else(|| ChartError::UnknownBody {
                    body: body.to_string(),
                })?;
                let (lon, r) = planar_orbit(elements, t);
                let (lon, earth_lon) = (lon.to_radians(), earth_lon.to_radians());
                let dx = r * lon.cos() - earth_r * earth_lon.cos();
                let dy = r * lon.sin() - earth_r * earth_lon.sin();
                (dy.atan2(dx).to_degrees() + to_date, dx.hypot(dy))
            }
        };

        Ok(EclipticPosition {
            longitude: normalize_degrees(longitude),
            latitude: 0.0,
            distance,
            low_precision: false,
        })
    }
}
