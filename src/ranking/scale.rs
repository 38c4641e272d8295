use crate::domain::Competition;

/// League rank codes, best to worst.
const LEAGUE_TIERS: [&str; 18] = [
    "A", "B0", "B2", "B4", "B6", "C0", "C2", "C4", "C6", "D0", "D2", "D4", "D6", "E0", "E2",
    "E4", "E6", "NG",
];

/// Recreational rank codes, best to worst.
const RECREATIONAL_TIERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Ordered tier codes for one competition's scale.
pub fn tiers(competition: Competition) -> &'static [&'static str] {
    match competition {
        Competition::League => &LEAGUE_TIERS,
        Competition::Recreational => &RECREATIONAL_TIERS,
    }
}

/// A rank code resolved to its position on one competition's scale.
///
/// Lower index means better rank. The competition tag travels with the value
/// so that distances are only ever taken within a single scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    competition: Competition,
    index: usize,
}

impl Rank {
    /// Resolves a code against the competition's tier list. Unknown or
    /// missing codes fall back to the worst tier.
    pub fn parse(competition: Competition, code: Option<&str>) -> Rank {
        let scale = tiers(competition);
        let index = code
            .and_then(|c| {
                scale
                    .iter()
                    .position(|tier| tier.eq_ignore_ascii_case(c.trim()))
            })
            .unwrap_or(scale.len() - 1);
        Rank { competition, index }
    }

    pub fn worst(competition: Competition) -> Rank {
        Rank {
            competition,
            index: tiers(competition).len() - 1,
        }
    }

    pub fn competition(&self) -> Competition {
        self.competition
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn code(&self) -> &'static str {
        tiers(self.competition)[self.index]
    }

    /// Whether this is the top tier of its scale, with no room to rise.
    pub fn is_best(&self) -> bool {
        self.index == 0
    }
}

/// Ordinal distance from `a` to `b`, `index(b) - index(a)`.
///
/// Positive when `b` sits further down (worse) on the scale. Both ranks must
/// come from the same competition.
pub fn distance(a: Rank, b: Rank) -> i64 {
    debug_assert_eq!(a.competition, b.competition);
    b.index as i64 - a.index as i64
}
