use super::scale::Rank;
use crate::domain::Competition;

/// Numeric strength value per league tier, aligned with the tier list.
///
/// Upset sizing uses these federation-published values rather than ordinal
/// index differences, so a win over an "A" player counts for far more than
/// the ordinal gap alone would suggest.
const LEAGUE_VALUES: [i64; 18] = [
    90, 75, 65, 55, 50, 45, 40, 35, 30, 25, 20, 15, 12, 10, 8, 6, 4, 2,
];

/// Numeric strength value per recreational tier.
const RECREATIONAL_VALUES: [i64; 6] = [35, 30, 25, 20, 15, 10];

/// Strength value of a rank on its competition's value table.
pub fn rank_value(rank: Rank) -> i64 {
    match rank.competition() {
        Competition::League => LEAGUE_VALUES[rank.index()],
        Competition::Recreational => RECREATIONAL_VALUES[rank.index()],
    }
}
