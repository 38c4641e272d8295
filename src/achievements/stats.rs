use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Competition, Match, Player, Team};
use crate::ranking::Rank;

/// Season totals for one player within one competition.
#[derive(Debug, Clone)]
pub struct PlayerSeasonStats {
    pub player_id: i64,
    pub alias: String,
    pub competition: Competition,
    /// Singles games in synced matches.
    pub games_played: u32,
    pub games_won: u32,
    /// Team codes the player turned out for, doubles appearances included.
    pub team_codes: BTreeSet<String>,
    pub rank: Rank,
    pub predicted_rank: Option<Rank>,
}

/// Season totals for one club team.
#[derive(Debug, Clone)]
pub struct TeamSeasonStats {
    pub competition: Competition,
    pub code: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
}

/// Per-entity season statistics the achievement scanners consume.
///
/// Built once per summary construction and handed around by reference;
/// nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct SeasonStats {
    pub players: Vec<PlayerSeasonStats>,
    pub teams: Vec<TeamSeasonStats>,
}

impl SeasonStats {
    /// Folds the snapshot into per-player and per-team season totals.
    /// Expects `matches` oldest first.
    pub fn build(players: &[Player], teams: &[Team], matches: &[Match]) -> SeasonStats {
        SeasonStats {
            players: build_player_stats(players, matches),
            teams: build_team_stats(teams, matches),
        }
    }

    pub fn alias_of(&self, player_id: i64) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.player_id == player_id)
            .map(|p| p.alias.as_str())
    }

    pub fn player(&self, player_id: i64, competition: Competition) -> Option<&PlayerSeasonStats> {
        self.players
            .iter()
            .find(|p| p.player_id == player_id && p.competition == competition)
    }
}

fn build_player_stats(players: &[Player], matches: &[Match]) -> Vec<PlayerSeasonStats> {
    let mut stats = Vec::new();
    for player in players {
        for entry in &player.entries {
            let mut games_played = 0;
            let mut games_won = 0;
            let mut team_codes = BTreeSet::new();
            for m in matches
                .iter()
                .filter(|m| m.competition == entry.competition && m.synced)
            {
                for game in m.games.iter().filter(|g| g.player_id == Some(player.id)) {
                    team_codes.insert(m.team_code.clone());
                    if game.doubles {
                        continue;
                    }
                    games_played += 1;
                    if game.outcome.is_won() {
                        games_won += 1;
                    }
                }
            }
            stats.push(PlayerSeasonStats {
                player_id: player.id,
                alias: player.alias.clone(),
                competition: entry.competition,
                games_played,
                games_won,
                team_codes,
                rank: Rank::parse(entry.competition, entry.rank.as_deref()),
                predicted_rank: entry
                    .predicted_rank
                    .as_deref()
                    .map(|code| Rank::parse(entry.competition, Some(code))),
            });
        }
    }
    stats
}

fn build_team_stats(teams: &[Team], matches: &[Match]) -> Vec<TeamSeasonStats> {
    // Registered teams show up even before their first match; unregistered
    // codes appearing in the match log are folded in as well.
    let mut by_key: BTreeMap<(&'static str, String), TeamSeasonStats> = BTreeMap::new();
    for team in teams {
        by_key
            .entry((team.competition.label(), team.code.clone()))
            .or_insert_with(|| TeamSeasonStats {
                competition: team.competition,
                code: team.code.clone(),
                played: 0,
                won: 0,
                drawn: 0,
            });
    }
    for m in matches.iter().filter(|m| m.is_played()) {
        let entry = by_key
            .entry((m.competition.label(), m.team_code.clone()))
            .or_insert_with(|| TeamSeasonStats {
                competition: m.competition,
                code: m.team_code.clone(),
                played: 0,
                won: 0,
                drawn: 0,
            });
        entry.played += 1;
        if m.is_won() {
            entry.won += 1;
        } else if m.is_drawn() {
            entry.drawn += 1;
        }
    }
    by_key.into_values().collect()
}
