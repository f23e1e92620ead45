//! Approximate Keplerian elements referred to the J2000 mean ecliptic and equinox.
//!
//! Standish's table (valid 1800-2050), evaluated as quadratics in Julian
//! centuries. Quadratic terms on the mean longitude are carried for the inner
//! planets and the gas giants; every other second-order term is zero.

use super::types::Body;

/// `c0 + c1*T + c2*T^2`, T in Julian centuries from J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementPolynomial {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl ElementPolynomial {
    const fn linear(c0: f64, c1: f64) -> Self {
        Self { c0, c1, c2: 0.0 }
    }

    const fn quadratic(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }

    pub fn at(&self, t: f64) -> f64 {
        self.c0 + t * (self.c1 + t * self.c2)
    }
}

/// Element polynomials for one orbit. Angles in degrees, distance in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: ElementPolynomial,
    pub eccentricity: ElementPolynomial,
    pub inclination: ElementPolynomial,
    pub mean_longitude: ElementPolynomial,
    pub longitude_of_perihelion: ElementPolynomial,
    pub ascending_node: ElementPolynomial,
}

/// Elements evaluated at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSet {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub longitude_of_perihelion: f64,
    pub ascending_node: f64,
}

impl OrbitalElements {
    pub fn at(&self, t: f64) -> ElementSet {
        ElementSet {
            semi_major_axis: self.semi_major_axis.at(t),
            eccentricity: self.eccentricity.at(t),
            inclination: self.inclination.at(t),
            mean_longitude: self.mean_longitude.at(t),
            longitude_of_perihelion: self.longitude_of_perihelion.at(t),
            ascending_node: self.ascending_node.at(t),
        }
    }
}

impl ElementSet {
    /// Mean anomaly in degrees (not normalized).
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_longitude - self.longitude_of_perihelion
    }

    /// Argument of perihelion in degrees.
    pub fn argument_of_perihelion(&self) -> f64 {
        self.longitude_of_perihelion - self.ascending_node
    }
}

const fn elements(
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: ElementPolynomial,
    peri: (f64, f64),
    node: (f64, f64),
) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: ElementPolynomial::linear(a.0, a.1),
        eccentricity: ElementPolynomial::linear(e.0, e.1),
        inclination: ElementPolynomial::linear(i.0, i.1),
        mean_longitude: l,
        longitude_of_perihelion: ElementPolynomial::linear(peri.0, peri.1),
        ascending_node: ElementPolynomial::linear(node.0, node.1),
    }
}

/// Earth-Moon barycentre, used as the observer for geocentric reduction.
pub const EARTH_MOON_BARYCENTER: OrbitalElements = elements(
    (1.00000261, 0.00000562),
    (0.01671123, -0.00004392),
    (-0.00001531, -0.01294668),
    ElementPolynomial::linear(100.46457166, 35999.37244981),
    (102.93768193, 0.32327364),
    (0.0, 0.0),
);

const MERCURY: OrbitalElements = elements(
    (0.38709927, 0.00000037),
    (0.20563593, 0.00001906),
    (7.00497902, -0.00594749),
    ElementPolynomial::quadratic(252.25032350, 149472.67411175, 0.00000535),
    (77.45779628, 0.16047689),
    (48.33076593, -0.12534081),
);

const VENUS: OrbitalElements = elements(
    (0.72333566, 0.00000390),
    (0.00677672, -0.00004107),
    (3.39467605, -0.00078890),
    ElementPolynomial::quadratic(181.97909950, 58517.81538729, 0.00000165),
    (131.60246718, 0.00268329),
    (76.67984255, -0.27769418),
);

const MARS: OrbitalElements = elements(
    (1.52371034, 0.00001847),
    (0.09339410, 0.00007882),
    (1.84969142, -0.00813131),
    ElementPolynomial::quadratic(-4.55343205, 19140.30268499, 0.00000261),
    (-23.94362959, 0.44441088),
    (49.55953891, -0.29257343),
);

const JUPITER: OrbitalElements = elements(
    (5.20288700, -0.00011607),
    (0.04838624, -0.00013253),
    (1.30439695, -0.00183714),
    ElementPolynomial::quadratic(34.39644051, 3034.74612775, 0.00000020),
    (14.72847983, 0.21252668),
    (100.47390909, 0.20469106),
);

const SATURN: OrbitalElements = elements(
    (9.53667594, -0.00125060),
    (0.05386179, -0.00050991),
    (2.48599187, 0.00193609),
    ElementPolynomial::quadratic(49.95424423, 1222.49362201, -0.00000058),
    (92.59887831, -0.41897216),
    (113.66242448, -0.28867794),
);

const URANUS: OrbitalElements = elements(
    (19.18916464, -0.00196176),
    (0.04725744, -0.00004397),
    (0.77263783, -0.00242939),
    ElementPolynomial::linear(313.23810451, 428.48202785),
    (170.95427630, 0.40805281),
    (74.01692503, 0.04240589),
);

const NEPTUNE: OrbitalElements = elements(
    (30.06992276, 0.00026291),
    (0.00859048, 0.00005105),
    (1.77004347, 0.00035372),
    ElementPolynomial::linear(-55.12002969, 218.45945325),
    (44.96476227, -0.32241464),
    (131.78422574, -0.00508664),
);

const PLUTO: OrbitalElements = elements(
    (39.48211675, -0.00031596),
    (0.24882730, 0.00005170),
    (17.14001206, 0.00004818),
    ElementPolynomial::linear(238.92903833, 145.20780515),
    (224.06891629, -0.04062942),
    (110.30393684, -0.01183482),
);

/// Heliocentric elements for a planet. `None` for the Sun, Moon and lunar
/// nodes, which are computed from their own series.
pub fn orbital_elements(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon | Body::NorthNode | Body::SouthNode => None,
    }
}
