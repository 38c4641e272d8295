use std::collections::HashMap;

use super::types::{
    AchievementContext, AchievementInfo, Candidate, pick_winners, pick_winners_with_tier_widening,
};
use crate::ranking::{Rank, distance, rank_value};

/// Most singles games won over the season; plain max with ties.
pub fn most_victories(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_player: HashMap<i64, (String, u32)> = HashMap::new();
    for p in ctx.scoped_players() {
        let entry = per_player
            .entry(p.player_id)
            .or_insert_with(|| (p.alias.clone(), 0));
        entry.1 += p.games_won;
    }
    let candidates = per_player
        .into_values()
        .filter(|(_, wins)| *wins > 0)
        .map(|(alias, wins)| {
            Candidate::new(alias, wins as i64, format!("{} {}", wins, plural(wins, "win")))
        })
        .collect();
    AchievementInfo {
        title: "Most Victories",
        desc: "Most singles games won this season",
        winners: pick_winners(candidates),
    }
}

/// Biggest predicted climb up the rank ladder; only positive jumps qualify.
pub fn highest_ranking_jump(ctx: &AchievementContext) -> AchievementInfo {
    // Per player, keep the biggest jump across the entries in scope.
    let mut per_player: HashMap<i64, (String, i64, Rank, Rank)> = HashMap::new();
    for p in ctx.scoped_players() {
        let Some(predicted) = p.predicted_rank else {
            continue;
        };
        let jump = distance(predicted, p.rank);
        if jump <= 0 {
            continue;
        }
        per_player
            .entry(p.player_id)
            .and_modify(|best| {
                if jump > best.1 {
                    *best = (p.alias.clone(), jump, p.rank, predicted);
                }
            })
            .or_insert((p.alias.clone(), jump, p.rank, predicted));
    }
    let candidates = per_player
        .into_values()
        .map(|(alias, jump, rank, predicted)| {
            Candidate::new(
                alias,
                jump,
                format!("{} → {} (+{} tiers)", rank.code(), predicted.code(), jump),
            )
        })
        .collect();
    AchievementInfo {
        title: "Highest Ranking Jump",
        desc: "Biggest climb from current to predicted rank",
        winners: pick_winners(candidates),
    }
}

/// Best win percentage, truncated to one decimal. Applies the tie-widening
/// rule for leaders who cannot rise any further.
pub fn best_win_percentage(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_player: HashMap<i64, (String, u32, u32)> = HashMap::new();
    for p in ctx.scoped_players().filter(|p| p.games_played > 0) {
        let entry = per_player
            .entry(p.player_id)
            .or_insert_with(|| (p.alias.clone(), 0, 0));
        entry.1 += p.games_played;
        entry.2 += p.games_won;
    }
    let candidates = per_player
        .into_iter()
        .map(|(player_id, (alias, games, wins))| {
            // Truncated, not rounded: 7 of 8 is 87.5, 8 of 9 is 88.8.
            let tenths = (wins as i64 * 1000) / games as i64;
            Candidate::new(
                alias,
                tenths,
                format!("{} ({} of {})", format_tenths(tenths), wins, games),
            )
            .at_best_tier(ctx.player_at_best_tier(player_id))
        })
        .collect();
    AchievementInfo {
        title: "Best Win Percentage",
        desc: "Highest share of singles games won",
        winners: pick_winners_with_tier_widening(candidates),
    }
}

/// Best-ranked opponent ever beaten, sized by the federation's numeric rank
/// values rather than ordinal tier distance.
pub fn ranking_destroyer(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_player: HashMap<i64, (i64, &'static str)> = HashMap::new();
    for m in ctx.scoped_matches().filter(|m| m.synced) {
        for game in m
            .games
            .iter()
            .filter(|g| !g.doubles && g.outcome.is_won())
        {
            let Some(player_id) = game.player_id else {
                continue;
            };
            let Some(player) = ctx.stats.player(player_id, m.competition) else {
                continue;
            };
            let opponent = Rank::parse(m.competition, game.opponent_rank.as_deref());
            let difference = rank_value(opponent) - rank_value(player.rank);
            if difference <= 0 {
                continue;
            }
            per_player
                .entry(player_id)
                .and_modify(|best| {
                    if difference > best.0 {
                        *best = (difference, opponent.code());
                    }
                })
                .or_insert((difference, opponent.code()));
        }
    }
    let candidates = per_player
        .into_iter()
        .filter_map(|(player_id, (difference, code))| {
            let alias = ctx.stats.alias_of(player_id)?;
            Some(Candidate::new(
                alias,
                difference,
                format!("beat {} (+{})", code, difference),
            ))
        })
        .collect();
    AchievementInfo {
        title: "Ranking Destroyer",
        desc: "Beat the best-ranked opponent of the season",
        winners: pick_winners(candidates),
    }
}

/// Most synced match outings with every singles game won.
pub fn perfect_formation(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_player: HashMap<i64, u32> = HashMap::new();
    for m in ctx.scoped_matches().filter(|m| m.synced) {
        let mut outcome_by_player: HashMap<i64, (u32, u32)> = HashMap::new();
        for game in m.games.iter().filter(|g| !g.doubles) {
            if let Some(player_id) = game.player_id {
                let entry = outcome_by_player.entry(player_id).or_insert((0, 0));
                entry.0 += 1;
                if game.outcome.is_won() {
                    entry.1 += 1;
                }
            }
        }
        for (player_id, (played, won)) in outcome_by_player {
            if played > 0 && played == won {
                *per_player.entry(player_id).or_insert(0) += 1;
            }
        }
    }
    let candidates = per_player
        .into_iter()
        .filter_map(|(player_id, outings)| {
            let alias = ctx.stats.alias_of(player_id)?;
            Some(Candidate::new(
                alias,
                outings as i64,
                format!("{} flawless {}", outings, plural(outings, "outing")),
            ))
        })
        .collect();
    AchievementInfo {
        title: "Perfect Formation",
        desc: "Most matches without dropping a single game",
        winners: pick_winners(candidates),
    }
}

/// Most distinct teams turned out for; needs at least two to qualify.
pub fn most_teams(ctx: &AchievementContext) -> AchievementInfo {
    let mut per_player: HashMap<i64, (String, std::collections::BTreeSet<String>)> =
        HashMap::new();
    for p in ctx.scoped_players() {
        let entry = per_player
            .entry(p.player_id)
            .or_insert_with(|| (p.alias.clone(), Default::default()));
        entry.1.extend(p.team_codes.iter().cloned());
    }
    let candidates = per_player
        .into_values()
        .filter(|(_, codes)| codes.len() >= 2)
        .map(|(alias, codes)| {
            let joined = codes.iter().cloned().collect::<Vec<_>>().join(", ");
            Candidate::new(alias, codes.len() as i64, format!("{} teams ({})", codes.len(), joined))
        })
        .collect();
    AchievementInfo {
        title: "Most Teams Played In",
        desc: "Turned out for the most club teams",
        winners: pick_winners(candidates),
    }
}

fn format_tenths(tenths: i64) -> String {
    format!("{}.{}%", tenths / 10, tenths % 10)
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
