use std::collections::HashMap;

use chrono::NaiveDate;

use super::types::{
    AchievementContext, AchievementInfo, Candidate, pick_winners, pick_winners_with_tier_widening,
};

/// Running win-streak state for one entity. Any non-won outcome resets the
/// current run; a new maximum is recorded the moment it is exceeded.
#[derive(Debug, Clone, Copy, Default)]
struct StreakTracker {
    current: u32,
    current_start: Option<NaiveDate>,
    best: u32,
    best_start: Option<NaiveDate>,
}

impl StreakTracker {
    fn win(&mut self, date: NaiveDate) {
        if self.current == 0 {
            self.current_start = Some(date);
        }
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            self.best_start = self.current_start;
        }
    }

    fn reset(&mut self) {
        self.current = 0;
        self.current_start = None;
    }
}

fn streak_trophy(best: u32, start: Option<NaiveDate>) -> String {
    match start {
        Some(date) => format!("{} in a row (since {})", best, date),
        None => format!("{} in a row", best),
    }
}

/// Longest run of consecutive singles wins, matches ascending by date and
/// games in match order. Tie-widening applies, as with win percentage.
pub fn longest_player_streak(ctx: &AchievementContext) -> AchievementInfo {
    let mut matches: Vec<_> = ctx.scoped_matches().filter(|m| m.synced).collect();
    matches.sort_by_key(|m| (m.date, m.id));

    let mut trackers: HashMap<i64, StreakTracker> = HashMap::new();
    for m in matches {
        let mut games: Vec<_> = m.games.iter().filter(|g| !g.doubles).collect();
        games.sort_by_key(|g| g.number);
        for game in games {
            let Some(player_id) = game.player_id else {
                continue;
            };
            let tracker = trackers.entry(player_id).or_default();
            if game.outcome.is_won() {
                tracker.win(m.date);
            } else {
                tracker.reset();
            }
        }
    }

    let candidates = trackers
        .into_iter()
        .filter(|(_, t)| t.best > 0)
        .filter_map(|(player_id, t)| {
            let alias = ctx.stats.alias_of(player_id)?;
            Some(
                Candidate::new(alias, t.best as i64, streak_trophy(t.best, t.best_start))
                    .at_best_tier(ctx.player_at_best_tier(player_id)),
            )
        })
        .collect();
    AchievementInfo {
        title: "Longest Win Streak",
        desc: "Most consecutive singles games won",
        winners: pick_winners_with_tier_widening(candidates),
    }
}

/// Longest run of consecutive team-match wins per club team. Teams carry no
/// rank tier, so no widening applies.
pub fn longest_team_streak(ctx: &AchievementContext) -> AchievementInfo {
    let mut matches: Vec<_> = ctx.scoped_matches().filter(|m| m.is_played()).collect();
    matches.sort_by_key(|m| (m.date, m.id));

    let mut trackers: HashMap<(&'static str, String), StreakTracker> = HashMap::new();
    for m in matches {
        let tracker = trackers
            .entry((m.competition.label(), m.team_code.clone()))
            .or_default();
        if m.is_won() {
            tracker.win(m.date);
        } else {
            tracker.reset();
        }
    }

    let candidates = trackers
        .into_iter()
        .filter(|(_, t)| t.best > 0)
        .map(|((competition, code), t)| {
            Candidate::new(
                format!("{} ({})", code, competition),
                t.best as i64,
                streak_trophy(t.best, t.best_start),
            )
        })
        .collect();
    AchievementInfo {
        title: "Longest Team Win Streak",
        desc: "Most consecutive team matches won",
        winners: pick_winners(candidates),
    }
}
