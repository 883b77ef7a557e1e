//! Reminder command.

use drillzy_core::reminders::random_reminder;
use drillzy_core::Config;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    if !config.notifications.enabled {
        println!("reminders are disabled");
        return Ok(());
    }
    println!("{}", random_reminder());
    Ok(())
}
