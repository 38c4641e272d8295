mod extractor;
pub mod types;

pub use extractor::extract_player_results;
pub use types::{GameResult, MatchGameResults};
