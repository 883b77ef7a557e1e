//! Per-day skill history records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of a user's skill history.
///
/// At most one item exists per (user, calendar date); the completion flag is
/// the only field mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHistoryItem {
    pub user_id: String,
    /// Calendar date the skill was assigned for. Time of day never matters.
    pub date: NaiveDate,
    /// The skill assigned for this day.
    pub skill_id: String,
    /// Whether the user marked the skill done.
    pub completed: bool,
}

impl SkillHistoryItem {
    pub fn new(user_id: &str, date: NaiveDate, skill_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            date,
            skill_id: skill_id.to_string(),
            completed: false,
        }
    }
}
