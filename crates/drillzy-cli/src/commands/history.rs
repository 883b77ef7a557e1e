//! Skill history commands.

use clap::Subcommand;
use drillzy_core::Database;

use super::current_profile;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List the full history, newest first
    List {
        /// Only show completed days
        #[arg(long)]
        completed: bool,
    },
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let profile = current_profile(&db)?;

    match action {
        HistoryAction::List { completed } => {
            let mut history = db.history(&profile.id)?;
            if completed {
                history.retain(|item| item.completed);
            }
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }
    Ok(())
}
