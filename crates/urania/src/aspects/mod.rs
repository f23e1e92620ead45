pub mod calculator;
pub mod types;

pub use calculator::{is_applying, AspectCalculator};
pub use types::{Aspect, AspectConfig, AspectDefinition, AspectKind};
