use std::collections::HashMap;

use super::stats::TeamSeasonStats;
use super::types::{AchievementContext, AchievementInfo, Candidate, pick_winners};

fn team_label(team: &TeamSeasonStats) -> String {
    format!("{} ({})", team.code, team.competition.label())
}

/// Best share of team matches won, truncated to one decimal.
pub fn team_win_percentage(ctx: &AchievementContext) -> AchievementInfo {
    let candidates = ctx
        .scoped_teams()
        .filter(|t| t.played > 0)
        .map(|t| {
            let tenths = (t.won as i64 * 1000) / t.played as i64;
            Candidate::new(
                team_label(t),
                tenths,
                format!("{}.{}% ({} of {})", tenths / 10, tenths % 10, t.won, t.played),
            )
        })
        .collect();
    AchievementInfo {
        title: "Best Team Win Percentage",
        desc: "Highest share of team matches won",
        winners: pick_winners(candidates),
    }
}

/// Most wins with the opposition held to zero.
pub fn clean_sweep(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_team: HashMap<(&'static str, String), u32> = HashMap::new();
    for m in ctx
        .scoped_matches()
        .filter(|m| m.is_won() && m.their_score == Some(0))
    {
        *per_team
            .entry((m.competition.label(), m.team_code.clone()))
            .or_insert(0) += 1;
    }
    let candidates = per_team
        .into_iter()
        .map(|((competition, code), count)| {
            Candidate::new(
                format!("{} ({})", code, competition),
                count as i64,
                format!("{} shutout {}", count, if count == 1 { "win" } else { "wins" }),
            )
        })
        .collect();
    AchievementInfo {
        title: "Clean Sweep",
        desc: "Most match wins without conceding a point",
        winners: pick_winners(candidates),
    }
}

/// Most wins by the narrowest possible margin for the format.
pub fn close_wins(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_team: HashMap<(&'static str, String), u32> = HashMap::new();
    for m in ctx
        .scoped_matches()
        .filter(|m| m.final_score() == Some(m.competition.close_score()))
    {
        *per_team
            .entry((m.competition.label(), m.team_code.clone()))
            .or_insert(0) += 1;
    }
    let candidates = per_team
        .into_iter()
        .map(|((competition, code), count)| {
            Candidate::new(
                format!("{} ({})", code, competition),
                count as i64,
                format!("{} narrow {}", count, if count == 1 { "win" } else { "wins" }),
            )
        })
        .collect();
    AchievementInfo {
        title: "Most Close Wins",
        desc: "Most wins by the narrowest possible margin",
        winners: pick_winners(candidates),
    }
}
