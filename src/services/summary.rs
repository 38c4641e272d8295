use chrono::NaiveDate;
use colored::Colorize;
use log::info;
use serde::Serialize;

use crate::achievements::{self, AchievementContext, AchievementInfo, SeasonStats};
use crate::calendar::{Week, WeekCalendar};
use crate::config::AppConfig;
use crate::domain::{Competition, Match, MatchLog, Player};
use crate::storage::SeasonSnapshot;
use crate::trend::{PerformanceBadge, badge_for_player};

/// One player's trend badge, labeled for presentation.
#[derive(Debug, Serialize)]
pub struct PlayerBadgeEntry {
    pub player: String,
    pub badge: PerformanceBadge,
}

/// Award run for one competition.
#[derive(Debug, Serialize)]
pub struct CompetitionAwards {
    pub competition: &'static str,
    pub achievements: Vec<AchievementInfo>,
}

#[derive(Debug, Serialize)]
pub struct CalendarSummary {
    pub current_week: usize,
    pub last_week: usize,
    pub bounds: Week,
    pub matches_this_week: usize,
}

/// The complete season-summary view: awards per competition, a badge per
/// player and the resolved calendar week. Recomputed from the snapshot on
/// every construction, never stored.
#[derive(Debug, Serialize)]
pub struct SeasonSummary {
    pub awards: Vec<CompetitionAwards>,
    pub badges: Vec<PlayerBadgeEntry>,
    pub calendar: CalendarSummary,
}

/// Turns a season snapshot into summaries, badges and calendars.
///
/// Stats are aggregated once at construction; each query recomputes its
/// output from them and the ordered match log.
pub struct SeasonSummaryService {
    config: AppConfig,
    log: MatchLog,
    players: Vec<Player>,
    stats: SeasonStats,
}

impl SeasonSummaryService {
    pub fn new(snapshot: SeasonSnapshot, config: AppConfig) -> Self {
        let log = MatchLog::new(snapshot.matches);
        let stats = SeasonStats::build(&snapshot.players, &snapshot.teams, log.matches());
        Self {
            config,
            log,
            players: snapshot.players,
            stats,
        }
    }

    /// Builds the full season-summary view.
    pub fn summary(&self, competition: Option<Competition>, today: NaiveDate) -> SeasonSummary {
        info!("=== Building season summary ===");

        let awards = self.collect_awards(competition);
        info!("  → Ran awards for {} competition(s)", awards.len());

        let badges = self.collect_badges(None);
        info!("  → Computed badges for {} players", badges.len());

        let calendar = self.calendar(None, false, today);
        let summary = SeasonSummary {
            awards,
            badges,
            calendar: CalendarSummary {
                current_week: calendar.current_week(),
                last_week: calendar.last_week(),
                bounds: calendar.current_bounds(),
                matches_this_week: calendar.current_matches().len(),
            },
        };
        info!("=== Summary complete ===");
        summary
    }

    /// Trend badges for every player, or one player by alias.
    pub fn collect_badges(&self, alias: Option<&str>) -> Vec<PlayerBadgeEntry> {
        let mut players: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| alias.is_none_or(|a| p.alias.eq_ignore_ascii_case(a)))
            .collect();
        players.sort_by(|a, b| a.alias.cmp(&b.alias));
        players
            .into_iter()
            .map(|p| PlayerBadgeEntry {
                player: p.alias.clone(),
                badge: badge_for_player(&self.config.classifier, p, self.log.matches()),
            })
            .collect()
    }

    pub fn calendar(
        &self,
        explicit_week: Option<usize>,
        include_placeholders: bool,
        today: NaiveDate,
    ) -> WeekCalendar {
        WeekCalendar::build(
            self.log.matches(),
            explicit_week,
            include_placeholders,
            today,
            &self.config.calendar,
        )
    }

    fn collect_awards(&self, competition: Option<Competition>) -> Vec<CompetitionAwards> {
        let competitions = match competition {
            Some(c) => vec![c],
            None => vec![Competition::League, Competition::Recreational],
        };
        competitions
            .into_iter()
            .map(|c| {
                let ctx = AchievementContext::new(&self.stats, self.log.matches(), Some(c));
                CompetitionAwards {
                    competition: c.label(),
                    achievements: achievements::run_all(&ctx),
                }
            })
            .collect()
    }

    /// Prints the summary as a colored terminal report.
    pub fn render_summary(&self, summary: &SeasonSummary) {
        for run in &summary.awards {
            println!("\n{}", format!("— {} —", run.competition).bold());
            for award in &run.achievements {
                println!("{}  {}", award.title.bold(), award.desc.dimmed());
                if award.winners.is_empty() {
                    println!("  (no qualifying entity)");
                }
                for winner in &award.winners {
                    println!("  🏆 {} — {}", winner.entity, winner.trophy);
                }
            }
        }

        println!("\n{}", "— Player trends —".bold());
        for entry in &summary.badges {
            println!("  {} {}", render_badge(&entry.badge), entry.player);
        }

        let calendar = &summary.calendar;
        println!(
            "\nWeek {} of {} ({} – {}), {} match(es) this week",
            calendar.current_week,
            calendar.last_week,
            calendar.bounds.start,
            calendar.bounds.end,
            calendar.matches_this_week
        );
    }

    /// Prints one calendar week with its matches.
    pub fn render_week(&self, calendar: &WeekCalendar) {
        let bounds = calendar.current_bounds();
        println!(
            "{}",
            format!(
                "Week {} of {} ({} – {})",
                calendar.current_week(),
                calendar.last_week(),
                bounds.start,
                bounds.end
            )
            .bold()
        );
        let matches = calendar.current_matches();
        if matches.is_empty() {
            println!("  no matches");
        }
        for m in matches {
            println!("  {}", render_match(m));
        }
    }

    /// Prints the badge list.
    pub fn render_badges(&self, entries: &[PlayerBadgeEntry]) {
        for entry in entries {
            println!("  {} {}", render_badge(&entry.badge), entry.player);
        }
    }
}

fn render_badge(badge: &PerformanceBadge) -> String {
    let (r, g, b) = hex_rgb(badge.color);
    format!("{} {}", badge.icon, badge.label.truecolor(r, g, b))
}

fn render_match(m: &Match) -> String {
    let opponent = m.opponent.as_deref().unwrap_or("(free date)");
    match m.final_score() {
        Some((ours, theirs)) => format!(
            "{}  {} vs {}  {}:{}",
            m.date, m.team_code, opponent, ours, theirs
        ),
        None => format!("{}  {} vs {}", m.date, m.team_code, opponent),
    }
}

fn hex_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0x9E)
    };
    (channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompetitionEntry, Game, GameOutcome, Team};
    use crate::trend::TrendKind;

    fn snapshot() -> SeasonSnapshot {
        let games = vec![
            Game {
                number: 1,
                player_id: Some(7),
                opponent_name: "Visitor".to_string(),
                opponent_rank: Some("C0".to_string()),
                outcome: GameOutcome::Won,
                doubles: false,
            },
            Game {
                number: 2,
                player_id: Some(8),
                opponent_name: "Visitor".to_string(),
                opponent_rank: Some("C0".to_string()),
                outcome: GameOutcome::Lost,
                doubles: false,
            },
        ];
        SeasonSnapshot {
            matches: vec![Match {
                id: 1,
                competition: Competition::League,
                team_code: "A".to_string(),
                opponent: Some("TTC Rivertown".to_string()),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                synced: true,
                our_score: Some(9),
                their_score: Some(7),
                games,
            }],
            players: vec![
                Player {
                    id: 7,
                    alias: "kas".to_string(),
                    entries: vec![CompetitionEntry {
                        competition: Competition::League,
                        rank: Some("C0".to_string()),
                        predicted_rank: None,
                    }],
                },
                Player {
                    id: 8,
                    alias: "ola".to_string(),
                    entries: vec![CompetitionEntry {
                        competition: Competition::League,
                        rank: Some("C2".to_string()),
                        predicted_rank: None,
                    }],
                },
            ],
            teams: vec![Team {
                competition: Competition::League,
                code: "A".to_string(),
                captains: vec!["kas".to_string()],
            }],
        }
    }

    fn service() -> SeasonSummaryService {
        SeasonSummaryService::new(snapshot(), AppConfig::new())
    }

    #[test]
    fn summary_covers_awards_badges_and_calendar() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let summary = service().summary(None, today);
        assert_eq!(summary.awards.len(), 2);
        assert_eq!(summary.badges.len(), 2);
        assert_eq!(summary.calendar.current_week, 1);
        assert_eq!(summary.calendar.matches_this_week, 1);
    }

    #[test]
    fn scoped_summary_runs_one_competition() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let summary = service().summary(Some(Competition::League), today);
        assert_eq!(summary.awards.len(), 1);
        assert_eq!(summary.awards[0].competition, "league");
    }

    #[test]
    fn badges_sort_by_alias_and_filter_case_insensitively() {
        let service = service();
        let all = service.collect_badges(None);
        let aliases: Vec<&str> = all.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(aliases, vec!["kas", "ola"]);
        // One synced match each: well under the countable floor.
        assert_eq!(all[0].badge.kind, TrendKind::New);

        let one = service.collect_badges(Some("KAS"));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].player, "kas");
    }

    #[test]
    fn summary_serializes_to_json() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let summary = service().summary(None, today);
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["awards"][0]["achievements"].is_array());
        assert_eq!(value["badges"][0]["player"], "kas");
        assert_eq!(value["calendar"]["last_week"], 1);
    }

    #[test]
    fn hex_colors_decode_to_rgb() {
        assert_eq!(hex_rgb("#F44336"), (0xF4, 0x43, 0x36));
        assert_eq!(hex_rgb("bogus"), (0x9E, 0x9E, 0x9E));
    }
}
