pub mod scale;
pub mod values;

pub use scale::{Rank, distance, tiers};
pub use values::rank_value;
