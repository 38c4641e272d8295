pub mod badge;
mod classifier;
pub mod expectation;

pub use badge::{PerformanceBadge, TrendKind};
pub use classifier::{badge_for_player, classify};
pub use expectation::{expected_win_probability, game_weight};
