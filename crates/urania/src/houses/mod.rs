pub mod angles;
pub mod systems;
pub mod types;

pub use angles::{compute_angles, compute_angles_clamped};
pub use systems::{compute_house_cusps, equal_cusps};
pub use types::{ChartAngles, HouseCusps, HouseSystem, UnknownHouseSystem, POLAR_CIRCLE_LATITUDE};
