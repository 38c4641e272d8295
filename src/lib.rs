pub mod achievements;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ranking;
pub mod results;
pub mod services;
pub mod storage;
pub mod trend;

use anyhow::{Result, bail};
use chrono::Utc;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::Competition;
use crate::services::SeasonSummaryService;
use crate::storage::load_snapshot;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_summary(snapshot: &str, competition: Option<&str>, json: bool) -> Result<()> {
    let competition = parse_competition(competition)?;
    let service = load_service(snapshot)?;
    let summary = service.summary(competition, Utc::now().date_naive());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        service.render_summary(&summary);
    }
    Ok(())
}

pub fn handle_badges(snapshot: &str, player: Option<&str>, json: bool) -> Result<()> {
    let service = load_service(snapshot)?;
    let badges = service.collect_badges(player);
    if json {
        println!("{}", serde_json::to_string_pretty(&badges)?);
    } else {
        service.render_badges(&badges);
    }
    Ok(())
}

pub fn handle_weeks(snapshot: &str, week: Option<usize>, include_placeholders: bool) -> Result<()> {
    let service = load_service(snapshot)?;
    let calendar = service.calendar(week, include_placeholders, Utc::now().date_naive());
    service.render_week(&calendar);
    Ok(())
}

fn load_service(snapshot: &str) -> Result<SeasonSummaryService> {
    let snapshot = load_snapshot(snapshot)?;
    Ok(SeasonSummaryService::new(snapshot, AppConfig::new()))
}

fn parse_competition(tag: Option<&str>) -> Result<Option<Competition>> {
    match tag {
        None => Ok(None),
        Some(tag) => match Competition::parse_tag(tag) {
            Some(competition) => Ok(Some(competition)),
            None => bail!("Unknown competition: {tag}"),
        },
    }
}
