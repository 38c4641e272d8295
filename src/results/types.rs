use crate::ranking::{Rank, distance};
use chrono::NaiveDate;

/// One singles outcome from the queried player's perspective.
///
/// Only an explicit win sets `won`; losses and drawn games both count as
/// not-won.
#[derive(Debug, Clone, Copy)]
pub struct GameResult {
    pub won: bool,
    pub player_rank: Rank,
    pub opponent_rank: Rank,
}

impl GameResult {
    /// Rank gap to the opponent. Positive when the opponent holds the better
    /// rank.
    pub fn rank_distance(&self) -> i64 {
        distance(self.opponent_rank, self.player_rank)
    }
}

/// One match's worth of results for a player, kept together so callers can
/// window by recency at match granularity.
#[derive(Debug, Clone)]
pub struct MatchGameResults {
    pub match_id: i64,
    pub match_date: NaiveDate,
    pub results: Vec<GameResult>,
}
