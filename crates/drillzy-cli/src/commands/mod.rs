pub mod config;
pub mod history;
pub mod profile;
pub mod remind;
pub mod skill;
pub mod stats;
pub mod streak;
pub mod survey;

use drillzy_core::{Database, Profile};

const CURRENT_USER_KEY: &str = "current_user";

/// Load the profile pointed at by the kv store.
///
/// # Errors
/// Returns an error if no profile has been initialized yet.
pub fn current_profile(db: &Database) -> Result<Profile, Box<dyn std::error::Error>> {
    let id = db
        .kv_get(CURRENT_USER_KEY)?
        .ok_or("no profile found; run `drillzy profile init <name>` first")?;
    db.get_profile(&id)?
        .ok_or_else(|| "stored profile is missing; run `drillzy profile init <name>`".into())
}

/// Remember the given profile as the active one.
pub fn set_current_profile(db: &Database, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    db.kv_set(CURRENT_USER_KEY, id)?;
    Ok(())
}
