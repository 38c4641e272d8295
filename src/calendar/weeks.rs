use chrono::{Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::config::CalendarSettings;
use crate::domain::Match;

/// Weeks run Monday through Sunday, independent of locale.
pub const WEEK_START: Weekday = Weekday::Mon;

/// The first day of the [`WEEK_START`]-anchored week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(WEEK_START).first_day()
}

/// Inclusive calendar bounds of one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Week {
        let start = week_start(date);
        Week {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A season's match list bucketed into calendar weeks.
///
/// Only weeks that contain at least one match get a bucket; gaps between
/// match weeks are skipped, so week numbers index the bucket sequence, not
/// the calendar. Week numbers are 1-based.
pub struct WeekCalendar {
    matches: Vec<Match>,
    weeks: Vec<Week>,
    current: usize,
    total_weeks: usize,
}

impl WeekCalendar {
    /// Buckets `matches` into weeks and resolves the current one.
    ///
    /// An explicit in-range week number wins over date-based resolution.
    /// Placeholder entries are dropped unless `include_placeholders` is set.
    /// An empty list synthesizes a fresh-season default: one bucket spanning
    /// the week of `today`, shown as week 1 of the configured season length.
    pub fn build(
        matches: &[Match],
        explicit_week: Option<usize>,
        include_placeholders: bool,
        today: NaiveDate,
        settings: &CalendarSettings,
    ) -> WeekCalendar {
        let mut kept: Vec<Match> = matches
            .iter()
            .filter(|m| include_placeholders || !m.is_placeholder())
            .cloned()
            .collect();
        kept.sort_by_key(|m| (m.date, m.id));

        let mut weeks: Vec<Week> = Vec::new();
        for m in &kept {
            let start = week_start(m.date);
            if weeks.last().map(|w| w.start) != Some(start) {
                weeks.push(Week::containing(m.date));
            }
        }

        if weeks.is_empty() {
            return WeekCalendar {
                matches: kept,
                weeks: vec![Week::containing(today)],
                current: 0,
                total_weeks: settings.default_season_weeks,
            };
        }

        let total_weeks = weeks.len();
        let current = match explicit_week {
            Some(number) if (1..=total_weeks).contains(&number) => number - 1,
            _ => resolve_current(&weeks, today),
        };
        WeekCalendar {
            matches: kept,
            weeks,
            current,
            total_weeks,
        }
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn first_week(&self) -> usize {
        1
    }

    pub fn current_week(&self) -> usize {
        self.current + 1
    }

    pub fn last_week(&self) -> usize {
        self.total_weeks
    }

    pub fn current_bounds(&self) -> Week {
        self.weeks[self.current]
    }

    /// Matches falling inside the resolved current week.
    pub fn current_matches(&self) -> Vec<&Match> {
        self.matches_for_week(self.current_week())
    }

    /// Matches falling inside week `number`, by inclusive date membership.
    pub fn matches_for_week(&self, number: usize) -> Vec<&Match> {
        let Some(week) = number.checked_sub(1).and_then(|i| self.weeks.get(i)) else {
            return Vec::new();
        };
        self.matches
            .iter()
            .filter(|m| week.contains(m.date))
            .collect()
    }
}

/// Walks forward from this week's Monday looking for a bucket. Once the
/// probe passes the last bucket the season is over and the last week stands.
fn resolve_current(weeks: &[Week], today: NaiveDate) -> usize {
    let last_end = weeks[weeks.len() - 1].end;
    let mut probe = week_start(today);
    while probe <= last_end {
        if let Some(index) = weeks.iter().position(|w| w.start == probe) {
            return index;
        }
        probe += Duration::days(7);
    }
    weeks.len() - 1
}
