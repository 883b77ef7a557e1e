//! Streak and achievement commands.

use clap::Subcommand;
use drillzy_core::{achievement_statuses, current_streak, Config, Database};

use super::current_profile;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current streak length
    Show,
    /// Achievement badge states
    Achievements,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let profile = current_profile(&db)?;
    let history = db.history(&profile.id)?;
    let streak = current_streak(&history);

    match action {
        StreakAction::Show => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "streak": streak }))?
            );
        }
        StreakAction::Achievements => {
            let config = Config::load()?;
            let statuses = achievement_statuses(streak, &config.achievements.thresholds);
            println!("{}", serde_json::to_string_pretty(&statuses)?);
        }
    }
    Ok(())
}
