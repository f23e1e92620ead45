pub mod assembler;
pub mod data;
pub mod settings;
pub mod transit;

pub use assembler::{chain_for_tiers, compute_chart, ChartAssembler};
pub use data::{AnglePoint, BodyPosition, Chart, ChartPayload};
pub use settings::{ChartSettings, EphemerisTier, PolarPolicy};
pub use transit::{compute_transits, scan_transits, TransitSnapshot};
