//! Urania: a tropical natal chart engine.
//!
//! Given a UTC instant and a geographic location, computes body positions on
//! the ecliptic, house cusps, chart angles and aspects. Pure computation, no
//! I/O.

pub mod angle;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod sidereal;
pub mod time;
pub mod western;

pub use aspects::{Aspect, AspectConfig, AspectDefinition, AspectKind};
pub use chart::{
    compute_chart, compute_transits, scan_transits, Chart, ChartAssembler, ChartSettings,
    EphemerisTier, PolarPolicy, TransitSnapshot,
};
pub use ephemeris::{Body, EphemerisChain, EphemerisSource, GeoLocation};
pub use error::{ChartError, Warning};
pub use houses::HouseSystem;
pub use time::Instant;
pub use western::ZodiacSign;
