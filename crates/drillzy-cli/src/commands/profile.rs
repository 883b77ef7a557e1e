//! Profile management commands.

use clap::Subcommand;
use drillzy_core::Database;

use super::{current_profile, set_current_profile};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create a profile and make it the active one
    Init {
        /// Display name
        name: String,
    },
    /// Show the active profile
    Show,
    /// Rename the active profile
    Rename {
        /// New display name
        name: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ProfileAction::Init { name } => {
            let profile = db.create_profile(&name)?;
            set_current_profile(&db, &profile.id)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Show => {
            let profile = current_profile(&db)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Rename { name } => {
            let profile = current_profile(&db)?;
            db.set_profile_name(&profile.id, &name)?;
            println!("renamed to {name}");
        }
    }
    Ok(())
}
