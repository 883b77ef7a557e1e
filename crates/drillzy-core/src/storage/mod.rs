mod config;
pub mod database;
pub mod migrations;

pub use config::{AchievementsConfig, CategorizerConfig, Config, NotificationsConfig};
pub use database::{Database, Profile};

use std::path::PathBuf;

/// Returns `~/.config/drillzy[-dev]/` based on DRILLZY_ENV.
///
/// Set DRILLZY_ENV=dev to use the development data directory, or
/// DRILLZY_DATA_DIR to override the location entirely (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = if let Ok(override_dir) = std::env::var("DRILLZY_DATA_DIR") {
        PathBuf::from(override_dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("DRILLZY_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("drillzy-dev")
        } else {
            base_dir.join("drillzy")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
