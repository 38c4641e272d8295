use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Federation a match, team or rank belongs to. Each competition carries its
/// own match format and its own rank scale; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    League,
    Recreational,
}

impl Competition {
    /// Points a side needs to win a team match in this format.
    pub fn win_threshold(&self) -> u32 {
        match self {
            Competition::League => 9,
            Competition::Recreational => 6,
        }
    }

    /// Total games played in a full team match.
    pub fn games_per_match(&self) -> u32 {
        match self {
            Competition::League => 16,
            Competition::Recreational => 10,
        }
    }

    /// The narrowest possible winning score in this format.
    pub fn close_score(&self) -> (u32, u32) {
        match self {
            Competition::League => (9, 7),
            Competition::Recreational => (6, 4),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Competition::League => "league",
            Competition::Recreational => "recreational",
        }
    }

    pub fn parse_tag(tag: &str) -> Option<Competition> {
        match tag.trim().to_lowercase().as_str() {
            "league" => Some(Competition::League),
            "recreational" => Some(Competition::Recreational),
            _ => None,
        }
    }
}

/// Outcome of a single game, from the club player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
    Draw,
}

impl GameOutcome {
    /// Only an explicit win counts; draws and losses are both "not won".
    pub fn is_won(&self) -> bool {
        matches!(self, GameOutcome::Won)
    }
}

/// One individual game inside a team match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Position of the game within the match.
    pub number: u32,
    /// Club participant; `None` when the lineup slot was never recorded.
    pub player_id: Option<i64>,
    pub opponent_name: String,
    /// Opponent's rank code on the match's competition scale.
    pub opponent_rank: Option<String>,
    pub outcome: GameOutcome,
    #[serde(default)]
    pub doubles: bool,
}

/// One team encounter on the club calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub competition: Competition,
    /// The club team fielding this match, e.g. "A".
    pub team_code: String,
    /// Opposing club; `None` marks a placeholder (bye) calendar entry.
    pub opponent: Option<String>,
    pub date: NaiveDate,
    /// Game-by-game results confirmed against the federation's official feed.
    #[serde(default)]
    pub synced: bool,
    pub our_score: Option<u32>,
    pub their_score: Option<u32>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Match {
    /// Bye/free dates carry no opponent and never produce results.
    pub fn is_placeholder(&self) -> bool {
        self.opponent.is_none()
    }

    pub fn is_played(&self) -> bool {
        self.our_score.is_some() && self.their_score.is_some()
    }

    pub fn is_won(&self) -> bool {
        match (self.our_score, self.their_score) {
            (Some(ours), Some(theirs)) => ours > theirs,
            _ => false,
        }
    }

    pub fn is_drawn(&self) -> bool {
        match (self.our_score, self.their_score) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }

    pub fn final_score(&self) -> Option<(u32, u32)> {
        match (self.our_score, self.their_score) {
            (Some(ours), Some(theirs)) => Some((ours, theirs)),
            _ => None,
        }
    }
}

/// Rank entry a player holds within one competition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionEntry {
    pub competition: Competition,
    /// Current rank code; missing codes fall back to the worst tier.
    pub rank: Option<String>,
    /// Rank the federation predicts for next season, when published.
    pub predicted_rank: Option<String>,
}

/// A club member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub alias: String,
    #[serde(default)]
    pub entries: Vec<CompetitionEntry>,
}

impl Player {
    pub fn entry(&self, competition: Competition) -> Option<&CompetitionEntry> {
        self.entries.iter().find(|e| e.competition == competition)
    }
}

/// A club team registered in one competition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub competition: Competition,
    pub code: String,
    #[serde(default)]
    pub captains: Vec<String>,
}
