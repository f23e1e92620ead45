pub mod adapter;
pub mod elements;
pub mod kepler;
pub mod keplerian;
pub mod lunisolar;
pub mod mean_motion;
pub mod types;

pub use adapter::{EphemerisChain, EphemerisSource, ResolvedPosition};
pub use elements::{orbital_elements, ElementPolynomial, ElementSet, OrbitalElements};
pub use kepler::{solve_kepler, KeplerSolution, Precision};
pub use keplerian::KeplerianEphemeris;
pub use mean_motion::MeanMotionEphemeris;
pub use types::{Body, EclipticPosition, GeoLocation};
