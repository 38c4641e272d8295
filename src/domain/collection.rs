use super::models::{Competition, Match};

/// Season match log kept in chronological order.
///
/// Every consumer of match history assumes ascending (date, id) order, so the
/// log sorts once on construction and hands out ordered slices.
pub struct MatchLog {
    matches: Vec<Match>,
}

impl MatchLog {
    pub fn new(mut matches: Vec<Match>) -> Self {
        matches.sort_by_key(|m| (m.date, m.id));
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All matches, oldest first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn for_competition(&self, competition: Competition) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.competition == competition)
            .cloned()
            .collect()
    }

    pub fn into_vec(self) -> Vec<Match> {
        self.matches
    }
}

impl Default for MatchLog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
