mod clutch;
mod players;
pub mod stats;
mod streaks;
mod teams;
mod types;

pub use stats::{PlayerSeasonStats, SeasonStats, TeamSeasonStats};
pub use types::{AchievementContext, AchievementInfo, AchievementWinner};

use log::info;

/// One independent season-award scanner. All scanners are pure and total:
/// missing or thin input produces an empty winner set, never an error.
pub type Scanner = fn(&AchievementContext) -> AchievementInfo;

/// The full award registry, in presentation order.
pub const SCANNERS: &[Scanner] = &[
    players::most_victories,
    players::highest_ranking_jump,
    players::best_win_percentage,
    streaks::longest_player_streak,
    players::ranking_destroyer,
    clutch::clutch_master,
    players::perfect_formation,
    players::most_teams,
    teams::team_win_percentage,
    streaks::longest_team_streak,
    teams::clean_sweep,
    teams::close_wins,
];

/// Runs every registered scanner over one context.
pub fn run_all(ctx: &AchievementContext) -> Vec<AchievementInfo> {
    info!(
        "Scanning {} achievements over {} matches",
        SCANNERS.len(),
        ctx.matches.len()
    );
    SCANNERS.iter().map(|scan| scan(ctx)).collect()
}
