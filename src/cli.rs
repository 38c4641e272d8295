use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "table-tennis season analytics")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Full season summary: awards, player trends and the current week
    Summary {
        /// Season snapshot JSON file
        #[arg(short, long, default_value = "season.json")]
        snapshot: String,
        /// Restrict awards to one competition (league or recreational)
        #[arg(short, long)]
        competition: Option<String>,
        /// Emit JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },
    /// Performance-trend badges per player
    Badges {
        /// Season snapshot JSON file
        #[arg(short, long, default_value = "season.json")]
        snapshot: String,
        /// Only this player, by alias
        #[arg(short, long)]
        player: Option<String>,
        /// Emit JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },
    /// Week-by-week match calendar
    Weeks {
        /// Season snapshot JSON file
        #[arg(short, long, default_value = "season.json")]
        snapshot: String,
        /// Explicit week number to show (defaults to the current week)
        #[arg(short, long)]
        week: Option<usize>,
        /// Keep placeholder (bye) entries in the calendar
        #[arg(long)]
        include_placeholders: bool,
    },
}
