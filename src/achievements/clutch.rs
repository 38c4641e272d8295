use std::collections::HashMap;

use super::types::{AchievementContext, AchievementInfo, Candidate, pick_winners};
use crate::domain::{GameOutcome, Match};

/// Finds the player who most often scored the decisive point in matches won
/// by the narrowest possible total.
///
/// Only matches won with exactly the format's minimum winning score qualify;
/// any wider margin means no single game was the one that sealed it. The
/// match is replayed in game order and the decisive game is the one that
/// first lifts the club total to the win threshold. A decisive doubles game,
/// or one with no recorded club participant, credits nobody.
pub fn clutch_master(ctx: &AchievementContext) -> AchievementInfo {
    let mut tally: HashMap<i64, u32> = HashMap::new();
    for m in ctx
        .scoped_matches()
        .filter(|m| m.synced && m.is_won() && m.our_score == Some(m.competition.win_threshold()))
    {
        if let Some(player_id) = decisive_player(m) {
            *tally.entry(player_id).or_insert(0) += 1;
        }
    }
    let candidates = tally
        .into_iter()
        .filter_map(|(player_id, count)| {
            let alias = ctx.stats.alias_of(player_id)?;
            Some(Candidate::new(
                alias,
                count as i64,
                format!("{} decisive {}", count, if count == 1 { "point" } else { "points" }),
            ))
        })
        .collect();
    AchievementInfo {
        title: "Clutch Master",
        desc: "Scored the point that sealed the tightest wins",
        winners: pick_winners(candidates),
    }
}

fn decisive_player(m: &Match) -> Option<i64> {
    let threshold = m.competition.win_threshold();
    let mut games: Vec<_> = m.games.iter().collect();
    games.sort_by_key(|g| g.number);

    let mut ours = 0;
    for game in games {
        match game.outcome {
            GameOutcome::Won => {
                ours += 1;
                if ours == threshold {
                    if game.doubles {
                        return None;
                    }
                    return game.player_id;
                }
            }
            GameOutcome::Lost | GameOutcome::Draw => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::stats::SeasonStats;
    use crate::domain::{Competition, CompetitionEntry, Game, Player};
    use chrono::NaiveDate;

    fn player(id: i64, alias: &str) -> Player {
        Player {
            id,
            alias: alias.to_string(),
            entries: vec![CompetitionEntry {
                competition: Competition::Recreational,
                rank: Some("C".to_string()),
                predicted_rank: None,
            }],
        }
    }

    fn game(number: u32, player_id: Option<i64>, outcome: GameOutcome, doubles: bool) -> Game {
        Game {
            number,
            player_id,
            opponent_name: "Visitor".to_string(),
            opponent_rank: Some("C".to_string()),
            outcome,
            doubles,
        }
    }

    /// A 6–4 recreational win where player `decider` takes game 10,
    /// the sixth win.
    fn narrow_recreational_win(id: i64, decider: i64) -> Match {
        let mut games = Vec::new();
        for number in 1..=5 {
            games.push(game(number, Some(1), GameOutcome::Won, false));
        }
        for number in 6..=9 {
            games.push(game(number, Some(2), GameOutcome::Lost, false));
        }
        games.push(game(10, Some(decider), GameOutcome::Won, false));
        Match {
            id,
            competition: Competition::Recreational,
            team_code: "B".to_string(),
            opponent: Some("TTC Rivertown".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            synced: true,
            our_score: Some(6),
            their_score: Some(4),
            games,
        }
    }

    #[test]
    fn credits_whoever_won_the_sealing_game() {
        let players = vec![player(1, "adam"), player(2, "beata"), player(3, "celina")];
        let matches = vec![narrow_recreational_win(1, 3)];
        let stats = SeasonStats::build(&players, &[], &matches);
        let ctx = AchievementContext::new(&stats, &matches, None);
        let info = clutch_master(&ctx);
        assert_eq!(info.winners.len(), 1);
        assert_eq!(info.winners[0].entity, "celina");
        assert_eq!(info.winners[0].trophy, "1 decisive point");
    }

    #[test]
    fn replay_follows_game_number_order_not_list_order() {
        let players = vec![player(1, "adam"), player(3, "celina")];
        let mut m = narrow_recreational_win(1, 3);
        m.games.reverse();
        let matches = vec![m];
        let stats = SeasonStats::build(&players, &[], &matches);
        let ctx = AchievementContext::new(&stats, &matches, None);
        let info = clutch_master(&ctx);
        assert_eq!(info.winners[0].entity, "celina");
    }

    #[test]
    fn wide_wins_never_qualify() {
        let players = vec![player(1, "adam")];
        let mut m = narrow_recreational_win(1, 1);
        m.our_score = Some(7);
        m.their_score = Some(3);
        let matches = vec![m];
        let stats = SeasonStats::build(&players, &[], &matches);
        let ctx = AchievementContext::new(&stats, &matches, None);
        assert!(clutch_master(&ctx).winners.is_empty());
    }

    #[test]
    fn decisive_doubles_game_credits_nobody() {
        let players = vec![player(1, "adam"), player(3, "celina")];
        let mut m = narrow_recreational_win(1, 3);
        m.games.last_mut().unwrap().doubles = true;
        let matches = vec![m];
        let stats = SeasonStats::build(&players, &[], &matches);
        let ctx = AchievementContext::new(&stats, &matches, None);
        assert!(clutch_master(&ctx).winners.is_empty());
    }

    #[test]
    fn tied_tallies_are_all_reported() {
        let players = vec![player(1, "adam"), player(3, "celina")];
        let mut second = narrow_recreational_win(2, 1);
        second.date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        let matches = vec![narrow_recreational_win(1, 3), second];
        let stats = SeasonStats::build(&players, &[], &matches);
        let ctx = AchievementContext::new(&stats, &matches, None);
        let info = clutch_master(&ctx);
        let entities: Vec<&str> = info.winners.iter().map(|w| w.entity.as_str()).collect();
        assert_eq!(entities, vec!["adam", "celina"]);
    }
}
