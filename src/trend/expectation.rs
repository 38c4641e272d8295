use crate::results::GameResult;

/// Expected win probability against an opponent `dist` tiers away.
///
/// Positive distance means the opponent holds the better rank. The
/// breakpoints are hand-tuned against seasons of club results and are part
/// of the product contract, so they stay exactly as listed.
pub fn expected_win_probability(dist: i64) -> f64 {
    match dist {
        d if d <= -3 => 0.85,
        -2 => 0.75,
        -1 => 0.65,
        0 => 0.50,
        1 => 0.35,
        2 => 0.25,
        3 => 0.15,
        _ => 0.10,
    }
}

/// Trend weight of a single result, or `None` for an ignored loss.
///
/// Losing to an opponent four or more tiers stronger says nothing about
/// form, so such losses are dropped from the counted sample entirely
/// instead of being scored as zero.
pub fn game_weight(result: &GameResult) -> Option<f64> {
    let dist = result.rank_distance();
    if result.won {
        Some(match dist {
            d if d >= 3 => 2.0,
            2 => 1.5,
            1 => 1.25,
            _ => 1.0,
        })
    } else {
        match dist {
            d if d >= 4 => None,
            d if d <= -3 => Some(-0.75),
            -2 => Some(-0.5),
            -1 => Some(-0.25),
            _ => Some(0.0),
        }
    }
}
