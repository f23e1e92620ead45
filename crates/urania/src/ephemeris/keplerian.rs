use crate::angle::normalize_degrees;
use crate::error::ChartError;
use crate::sidereal::{nutation, precession_in_longitude};
use crate::time::centuries_since_j2000;

use super::adapter::EphemerisSource;
use super::elements::{orbital_elements, OrbitalElements, EARTH_MOON_BARYCENTER};
use super::kepler::{solve_kepler, true_anomaly};
use super::lunisolar;
use super::types::{Body, EclipticPosition};

/// Heliocentric rectangular ecliptic coordinates (J2000), AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HeliocentricPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub low_precision: bool,
}

/// Place an orbit at `t` centuries from J2000 by solving Kepler's equation.
pub(crate) fn heliocentric(elements: &OrbitalElements, t: f64) -> HeliocentricPoint {
    let set = elements.at(t);
    let e = set.eccentricity;

    let mean_anomaly = normalize_degrees(set.mean_anomaly()).to_radians();
    let solution = solve_kepler(mean_anomaly, e);
    let big_e = solution.eccentric_anomaly;

    let nu = true_anomaly(big_e, e);
    let r = set.semi_major_axis * (1.0 - e * big_e.cos());
    let u = nu + set.argument_of_perihelion().to_radians();

    let node = set.ascending_node.to_radians();
    let incl = set.inclination.to_radians();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_node, cos_node) = node.sin_cos();

    HeliocentricPoint {
        x: r * (cos_node * cos_u - sin_node * sin_u * incl.cos()),
        y: r * (sin_node * cos_u + cos_node * sin_u * incl.cos()),
        z: r * sin_u * incl.sin(),
        low_precision: solution.is_low_precision(),
    }
}

/// Default ephemeris: Keplerian orbits for the planets, truncated series for
/// the Sun and Moon, mean lunar nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerianEphemeris;

impl KeplerianEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn planet(&self, elements: &OrbitalElements, t: f64) -> EclipticPosition {
        let body = heliocentric(elements, t);
        let earth = heliocentric(&EARTH_MOON_BARYCENTER, t);

        let (dx, dy, dz) = (body.x - earth.x, body.y - earth.y, body.z - earth.z);
        let in_plane = dx.hypot(dy);
        let longitude = dy.atan2(dx).to_degrees();
        let latitude = dz.atan2(in_plane).to_degrees();

        EclipticPosition {
            longitude: normalize_degrees(
                longitude + precession_in_longitude(t) + nutation(t).longitude,
            ),
            latitude,
            distance: in_plane.hypot(dz),
            low_precision: body.low_precision || earth.low_precision,
        }
    }
}

impl EphemerisSource for KeplerianEphemeris {
    fn name(&self) -> &str {
        "keplerian"
    }

    fn position(&self, body: Body, julian_day: f64) -> Result<EclipticPosition, ChartError> {
        let t = centuries_since_j2000(julian_day);
        let position = match body {
            Body::Sun => lunisolar::sun_position(t),
            Body::Moon => lunisolar::moon_position(t),
            Body::NorthNode => lunisolar::north_node_position(t),
            Body::SouthNode => lunisolar::south_node_position(t),
            _ => {
                let elements = orbital_elements(body).ok_or_else(|| ChartError::UnknownBody {
                    body: body.to_string(),
                })?;
                self.planet(elements, t)
            }
        };
        Ok(position)
    }
}
