pub struct ClassifierSettings {
    pub min_countable_results: usize,
    pub recent_match_window: usize,
    pub trend_margin: f64,
    pub expectation_band: f64,
    pub hot_recent_average: f64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            min_countable_results: 3,
            recent_match_window: 2, // most recent matches per competition
            trend_margin: 0.15,
            expectation_band: 1.5,
            hot_recent_average: 0.6,
        }
    }
}

pub struct CalendarSettings {
    pub default_season_weeks: usize,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            default_season_weeks: 22,
        }
    }
}

pub struct AppConfig {
    pub classifier: ClassifierSettings,
    pub calendar: CalendarSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            classifier: ClassifierSettings::default(),
            calendar: CalendarSettings::default(),
        }
    }
}
