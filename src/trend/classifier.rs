use super::badge::{PerformanceBadge, TrendKind};
use super::expectation::{expected_win_probability, game_weight};
use crate::config::ClassifierSettings;
use crate::domain::{Match, Player};
use crate::ranking::Rank;
use crate::results::{GameResult, extract_player_results};

/// Classifies a season of results into a trend badge.
///
/// `recent_results` is the recency window the caller cut from the same
/// season; it may be empty, in which case the overall average stands in.
/// Ignored losses are dropped from both samples before anything is
/// computed, so they can never depress the signal.
pub fn classify(
    settings: &ClassifierSettings,
    all_results: &[GameResult],
    recent_results: &[GameResult],
) -> PerformanceBadge {
    let counted: Vec<(f64, &GameResult)> = all_results
        .iter()
        .filter_map(|r| game_weight(r).map(|w| (w, r)))
        .collect();
    if counted.len() < settings.min_countable_results {
        return TrendKind::New.badge();
    }

    let overall_avg = counted.iter().map(|(w, _)| *w).sum::<f64>() / counted.len() as f64;

    let recent_weights: Vec<f64> = recent_results.iter().filter_map(game_weight).collect();
    let recent_avg = if recent_weights.is_empty() {
        overall_avg
    } else {
        recent_weights.iter().sum::<f64>() / recent_weights.len() as f64
    };

    let expected_wins: f64 = counted
        .iter()
        .map(|(_, r)| expected_win_probability(r.rank_distance()))
        .sum();
    let actual_wins = counted.iter().filter(|(_, r)| r.won).count() as f64;
    let performance = actual_wins - expected_wins;

    // Evaluated strictly in priority order; the first match decides.
    let trending_up = recent_avg > overall_avg + settings.trend_margin;
    let kind = if performance > settings.expectation_band
        && (trending_up || recent_avg > settings.hot_recent_average)
    {
        TrendKind::OnFire
    } else if performance > settings.expectation_band {
        TrendKind::Solid
    } else if trending_up && performance >= -settings.expectation_band {
        TrendKind::Rising
    } else if performance < -settings.expectation_band
        || recent_avg < overall_avg - settings.trend_margin
    {
        TrendKind::Struggling
    } else if performance.abs() <= settings.expectation_band {
        TrendKind::OnTrack
    } else {
        TrendKind::Stable
    };
    kind.badge()
}

/// Computes one player's badge from the full season history.
///
/// Results are extracted per competition entry using that competition's
/// scale, the recency window is cut per competition, and both samples are
/// concatenated before classification.
pub fn badge_for_player(
    settings: &ClassifierSettings,
    player: &Player,
    matches: &[Match],
) -> PerformanceBadge {
    let mut all_results = Vec::new();
    let mut recent_results = Vec::new();
    for entry in &player.entries {
        let rank = Rank::parse(entry.competition, entry.rank.as_deref());
        let groups = extract_player_results(player.id, rank, matches);
        for (position, group) in groups.iter().enumerate() {
            if position < settings.recent_match_window {
                recent_results.extend(group.results.iter().copied());
            }
            all_results.extend(group.results.iter().copied());
        }
    }
    classify(settings, &all_results, &recent_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Competition, CompetitionEntry, Game, GameOutcome};
    use crate::ranking::tiers;
    use chrono::NaiveDate;

    fn result_at(dist: i64, won: bool) -> GameResult {
        let scale = tiers(Competition::League);
        let player_index = 8; // "C6"
        let opponent_index = (player_index as i64 - dist) as usize;
        GameResult {
            won,
            player_rank: Rank::parse(Competition::League, Some(scale[player_index])),
            opponent_rank: Rank::parse(Competition::League, Some(scale[opponent_index])),
        }
    }

    fn settings() -> ClassifierSettings {
        ClassifierSettings::default()
    }

    #[test]
    fn fewer_than_three_countable_results_is_always_new() {
        let thin = [result_at(0, true), result_at(0, false)];
        assert_eq!(classify(&settings(), &thin, &[]).kind, TrendKind::New);

        // Three results, but one is an ignored loss, so only two count.
        let with_ignored = [result_at(0, true), result_at(0, true), result_at(4, false)];
        assert_eq!(
            classify(&settings(), &with_ignored, &[]).kind,
            TrendKind::New
        );
    }

    #[test]
    fn reference_sample_lands_on_track() {
        let sample = [
            result_at(3, true),
            result_at(3, true),
            result_at(-3, false),
        ];
        assert_eq!(classify(&settings(), &sample, &[]).kind, TrendKind::OnTrack);
    }

    #[test]
    fn ignored_losses_never_change_the_outcome() {
        let base = vec![
            result_at(3, true),
            result_at(3, true),
            result_at(-3, false),
        ];
        let mut padded = base.clone();
        padded.push(result_at(4, false));
        padded.push(result_at(6, false));

        let without = classify(&settings(), &base, &[]).kind;
        let with = classify(&settings(), &padded, &padded[3..]).kind;
        assert_eq!(without, with);
    }

    #[test]
    fn overperformers_with_hot_recent_form_are_on_fire() {
        let all = vec![result_at(3, true); 4];
        let recent = &all[..2];
        assert_eq!(classify(&settings(), &all, recent).kind, TrendKind::OnFire);
    }

    #[test]
    fn overperformance_alone_is_solid() {
        let mut all = vec![result_at(0, true); 8];
        all.push(result_at(-1, false));
        all.push(result_at(-1, false));
        let recent = &all[8..];
        assert_eq!(classify(&settings(), &all, recent).kind, TrendKind::Solid);
    }

    #[test]
    fn hot_streak_within_the_band_is_rising() {
        let all = [
            result_at(1, true),
            result_at(1, true),
            result_at(0, false),
            result_at(0, false),
        ];
        let recent = &all[..2];
        assert_eq!(classify(&settings(), &all, recent).kind, TrendKind::Rising);
    }

    #[test]
    fn cold_recent_form_is_struggling() {
        let mut all = vec![result_at(0, true); 4];
        all.extend([result_at(-1, false); 4]);
        let recent = &all[4..6];
        assert_eq!(
            classify(&settings(), &all, recent).kind,
            TrendKind::Struggling
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let all = [
            result_at(1, true),
            result_at(1, true),
            result_at(0, false),
            result_at(0, false),
        ];
        let first = classify(&settings(), &all, &all[..2]).kind;
        let second = classify(&settings(), &all, &all[..2]).kind;
        assert_eq!(first, second);
    }

    fn singles_game(player_id: i64, opponent_rank: &str, outcome: GameOutcome) -> Game {
        Game {
            number: 1,
            player_id: Some(player_id),
            opponent_name: "Visitor".to_string(),
            opponent_rank: Some(opponent_rank.to_string()),
            outcome,
            doubles: false,
        }
    }

    fn synced_match(
        id: i64,
        competition: Competition,
        date: NaiveDate,
        games: Vec<Game>,
    ) -> Match {
        Match {
            id,
            competition,
            team_code: "A".to_string(),
            opponent: Some("TTC Rivertown".to_string()),
            date,
            synced: true,
            our_score: Some(9),
            their_score: Some(7),
            games,
        }
    }

    fn league_player(id: i64) -> Player {
        Player {
            id,
            alias: "kas".to_string(),
            entries: vec![CompetitionEntry {
                competition: Competition::League,
                rank: Some("C0".to_string()),
                predicted_rank: None,
            }],
        }
    }

    #[test]
    fn players_without_history_get_the_new_badge() {
        let badge = badge_for_player(&settings(), &league_player(7), &[]);
        assert_eq!(badge.kind, TrendKind::New);
    }

    #[test]
    fn recency_window_covers_two_matches_per_competition() {
        let player = league_player(7);
        let matches = vec![
            synced_match(
                1,
                Competition::League,
                NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                vec![
                    singles_game(7, "C0", GameOutcome::Lost),
                    singles_game(7, "C0", GameOutcome::Lost),
                ],
            ),
            synced_match(
                2,
                Competition::League,
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                vec![singles_game(7, "B6", GameOutcome::Won)],
            ),
            synced_match(
                3,
                Competition::League,
                NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
                vec![singles_game(7, "B6", GameOutcome::Won)],
            ),
        ];
        // Only the two most recent matches enter the recency window, which
        // is what lifts the recent average above the season average here.
        let badge = badge_for_player(&settings(), &player, &matches);
        assert_eq!(badge.kind, TrendKind::Rising);
    }

    #[test]
    fn results_concatenate_across_competitions() {
        let mut player = league_player(7);
        player.entries.push(CompetitionEntry {
            competition: Competition::Recreational,
            rank: Some("C".to_string()),
            predicted_rank: None,
        });
        let matches = vec![
            synced_match(
                1,
                Competition::League,
                NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                vec![singles_game(7, "B4", GameOutcome::Won)],
            ),
            synced_match(
                2,
                Competition::League,
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                vec![singles_game(7, "B4", GameOutcome::Won)],
            ),
            synced_match(
                3,
                Competition::Recreational,
                NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
                vec![singles_game(7, "B", GameOutcome::Won)],
            ),
        ];
        // One competition alone has too few results; together they clear
        // the floor and the upset wins push the badge to on-fire.
        let badge = badge_for_player(&settings(), &player, &matches);
        assert_eq!(badge.kind, TrendKind::OnFire);
    }
}
