pub mod placement;
pub mod signs;
pub mod summary;

pub use placement::house_of;
pub use signs::{degree_in_sign, sign_index, sign_of, Element, Modality, ZodiacSign};
pub use summary::{moon_phase, summarize, ChartSummary, DistributionPattern};
