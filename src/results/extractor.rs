use std::cmp::Reverse;

use super::types::{GameResult, MatchGameResults};
use crate::domain::Match;
use crate::ranking::Rank;

/// Collects a player's singles results from a season's match list.
///
/// Only matches synced against the official results feed are considered.
/// Doubles games and games played by anyone else are skipped, and an
/// opponent with no recorded rank is treated as worst-tier. Output is
/// grouped per match and sorted most recent first regardless of input
/// order; callers rely on that ordering when they window by recency.
pub fn extract_player_results(
    player_id: i64,
    player_rank: Rank,
    matches: &[Match],
) -> Vec<MatchGameResults> {
    let competition = player_rank.competition();
    let mut groups: Vec<MatchGameResults> = matches
        .iter()
        .filter(|m| m.competition == competition && m.synced)
        .filter_map(|m| {
            let results: Vec<GameResult> = m
                .games
                .iter()
                .filter(|game| !game.doubles && game.player_id == Some(player_id))
                .map(|game| GameResult {
                    won: game.outcome.is_won(),
                    player_rank,
                    opponent_rank: Rank::parse(competition, game.opponent_rank.as_deref()),
                })
                .collect();
            if results.is_empty() {
                None
            } else {
                Some(MatchGameResults {
                    match_id: m.id,
                    match_date: m.date,
                    results,
                })
            }
        })
        .collect();
    groups.sort_by_key(|g| Reverse((g.match_date, g.match_id)));
    groups
}
