//! Progress statistics commands.

use chrono::Local;
use clap::Subcommand;
use drillzy_core::stats::{category_breakdown, cumulative_completions, weekly_progress};
use drillzy_core::Database;

use super::current_profile;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Completions per day over the trailing week
    Weekly,
    /// Completed skills per archetype
    Categories,
    /// Cumulative completion curve
    Cumulative,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let profile = current_profile(&db)?;
    let history = db.history(&profile.id)?;

    match action {
        StatsAction::Weekly => {
            let week = weekly_progress(&history, Local::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
        StatsAction::Categories => {
            let catalog = db.all_skills()?;
            let breakdown = category_breakdown(&history, &catalog);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        StatsAction::Cumulative => {
            let curve = cumulative_completions(&history);
            println!("{}", serde_json::to_string_pretty(&curve)?);
        }
    }
    Ok(())
}
