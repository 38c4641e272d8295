use serde::Serialize;

use super::stats::{PlayerSeasonStats, SeasonStats, TeamSeasonStats};
use crate::domain::{Competition, Match};

/// One entity holding (a share of) an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementWinner {
    pub entity: String,
    pub trophy: String,
}

/// A season superlative with its full tie set.
///
/// `winners` is empty when no entity qualifies; scanners never fail.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementInfo {
    pub title: &'static str,
    pub desc: &'static str,
    pub winners: Vec<AchievementWinner>,
}

/// Everything a scanner may look at: aggregated season stats, the raw match
/// log (oldest first) and an optional competition restriction.
pub struct AchievementContext<'a> {
    pub stats: &'a SeasonStats,
    pub matches: &'a [Match],
    pub competition: Option<Competition>,
}

impl<'a> AchievementContext<'a> {
    pub fn new(
        stats: &'a SeasonStats,
        matches: &'a [Match],
        competition: Option<Competition>,
    ) -> Self {
        Self {
            stats,
            matches,
            competition,
        }
    }

    pub fn scoped_matches(&self) -> impl Iterator<Item = &'a Match> {
        let scope = self.competition;
        self.matches
            .iter()
            .filter(move |m| scope.is_none_or(|c| c == m.competition))
    }

    pub fn scoped_players(&self) -> impl Iterator<Item = &'a PlayerSeasonStats> {
        let scope = self.competition;
        self.stats
            .players
            .iter()
            .filter(move |p| scope.is_none_or(|c| c == p.competition))
    }

    pub fn scoped_teams(&self) -> impl Iterator<Item = &'a TeamSeasonStats> {
        let scope = self.competition;
        self.stats
            .teams
            .iter()
            .filter(move |t| scope.is_none_or(|c| c == t.competition))
    }

    /// Whether a player holds the top tier on every scale in scope, leaving
    /// no room to rise. Drives the tie-widening rule.
    pub fn player_at_best_tier(&self, player_id: i64) -> bool {
        let mut entries = self
            .scoped_players()
            .filter(|p| p.player_id == player_id)
            .peekable();
        entries.peek().is_some() && entries.all(|p| p.rank.is_best())
    }
}

/// One contender inside a scanner, before the extreme is picked.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub label: String,
    pub metric: i64,
    pub trophy: String,
    /// Already at the top tier of the scale, relevant only where the
    /// tie-widening rule applies.
    pub best_tier: bool,
}

impl Candidate {
    pub fn new(label: impl Into<String>, metric: i64, trophy: String) -> Self {
        Self {
            label: label.into(),
            metric,
            trophy,
            best_tier: false,
        }
    }

    pub fn at_best_tier(mut self, best_tier: bool) -> Self {
        self.best_tier = best_tier;
        self
    }
}

/// All candidates tied at the maximum metric, sorted by label.
pub(crate) fn pick_winners(candidates: Vec<Candidate>) -> Vec<AchievementWinner> {
    let Some(top) = candidates.iter().map(|c| c.metric).max() else {
        return Vec::new();
    };
    finish(candidates.into_iter().filter(|c| c.metric == top).collect())
}

/// Like [`pick_winners`], but when every leader already sits at the best
/// tier of its scale the entities holding the next-best metric value join
/// the winner set. A single widening step, never recursive.
pub(crate) fn pick_winners_with_tier_widening(
    candidates: Vec<Candidate>,
) -> Vec<AchievementWinner> {
    let Some(top) = candidates.iter().map(|c| c.metric).max() else {
        return Vec::new();
    };
    let (leaders, rest): (Vec<Candidate>, Vec<Candidate>) =
        candidates.into_iter().partition(|c| c.metric == top);

    let mut winners = leaders.clone();
    if leaders.iter().all(|c| c.best_tier) {
        if let Some(runner_up) = rest.iter().map(|c| c.metric).max() {
            winners.extend(rest.into_iter().filter(|c| c.metric == runner_up));
        }
    }
    finish(winners)
}

fn finish(mut winners: Vec<Candidate>) -> Vec<AchievementWinner> {
    winners.sort_by(|a, b| a.label.cmp(&b.label));
    winners
        .into_iter()
        .map(|c| AchievementWinner {
            entity: c.label,
            trophy: c.trophy,
        })
        .collect()
}
