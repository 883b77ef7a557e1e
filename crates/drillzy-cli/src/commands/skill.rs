//! Daily skill commands: assignment, completion, and burn.

use chrono::Local;
use clap::Subcommand;
use drillzy_core::{current_streak, pick_next, Database};

use super::current_profile;

#[derive(Subcommand)]
pub enum SkillAction {
    /// Show today's skill
    Today,
    /// Assign a skill for today if none is assigned yet
    Assign,
    /// Mark today's skill completed
    Complete,
    /// Swap today's uncompleted skill for a fresh one
    Burn,
}

pub fn run(action: SkillAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let profile = current_profile(&db)?;
    let today = Local::now().date_naive();

    match action {
        SkillAction::Today => {
            let history = db.history(&profile.id)?;
            match history.iter().find(|item| item.date == today) {
                Some(item) => {
                    let skill = db
                        .get_skill(&item.skill_id)?
                        .ok_or_else(|| format!("unknown skill id {}", item.skill_id))?;
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({
                            "date": item.date,
                            "skill": skill,
                            "completed": item.completed,
                        }))?
                    );
                }
                None => println!("no skill assigned for today; run `drillzy skill assign`"),
            }
        }
        SkillAction::Assign => {
            let history = db.history(&profile.id)?;
            if history.iter().any(|item| item.date == today) {
                println!("today's skill is already assigned");
                return Ok(());
            }

            let seen = db.seen_skill_ids(&profile.id)?;
            let catalog = db.all_skills()?;
            match pick_next(&catalog, &seen, profile.category) {
                Some(skill) => {
                    db.assign_skill(&profile.id, today, &skill.id)?;
                    println!("{}", serde_json::to_string_pretty(skill)?);
                }
                None => println!("no skills left; you have seen the whole catalog"),
            }
        }
        SkillAction::Complete => {
            if !db.complete_skill(&profile.id, today)? {
                return Err("no skill assigned for today".into());
            }
            let history = db.history(&profile.id)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "completed": true,
                    "streak": current_streak(&history),
                }))?
            );
        }
        SkillAction::Burn => {
            let seen = db.seen_skill_ids(&profile.id)?;
            let catalog = db.all_skills()?;
            let replacement = pick_next(&catalog, &seen, profile.category)
                .ok_or("no skills left to swap in")?;
            if !db.replace_skill(&profile.id, today, &replacement.id)? {
                return Err("nothing to burn: no uncompleted skill assigned for today".into());
            }
            println!("{}", serde_json::to_string_pretty(replacement)?);
        }
    }
    Ok(())
}
