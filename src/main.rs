use anyhow::Result;

use tt_season_analytics::cli::Command;
use tt_season_analytics::{handle_badges, handle_summary, handle_weeks, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Summary {
            snapshot,
            competition,
            json,
        } => handle_summary(snapshot, competition.as_deref(), *json),
        Command::Badges {
            snapshot,
            player,
            json,
        } => handle_badges(snapshot, player.as_deref(), *json),
        Command::Weeks {
            snapshot,
            week,
            include_placeholders,
        } => handle_weeks(snapshot, *week, *include_placeholders),
    }
}
