//! Streak calculation over an immutable history snapshot.
//!
//! The streak is a derived value, recomputed from the full history whenever
//! it is needed, never stored. A streak stays "alive" for a user who has not
//! yet completed today's skill but completed yesterday's.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::history::SkillHistoryItem;

/// Number of consecutive completed calendar days ending at `today` or, if
/// today is not yet completed, at yesterday.
///
/// Pure function over the snapshot: no I/O, inputs never mutated, total for
/// any well-formed history. Duplicate items for one date (which the storage
/// layer prevents) are treated defensively: the date counts as completed if
/// any item for it is.
pub fn streak_on(history: &[SkillHistoryItem], today: NaiveDate) -> u32 {
    let completed: HashSet<NaiveDate> = history
        .iter()
        .filter(|item| item.completed)
        .map(|item| item.date)
        .collect();

    if completed.is_empty() {
        return 0;
    }

    let mut cursor = today;
    if !completed.contains(&cursor) {
        match cursor.pred_opt() {
            Some(yesterday) => cursor = yesterday,
            None => return 0,
        }
    }

    let mut streak = 0u32;
    while completed.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

/// Streak as of the local calendar date.
pub fn current_streak(history: &[SkillHistoryItem]) -> u32 {
    streak_on(history, Local::now().date_naive())
}

/// A streak badge at a fixed day threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementStatus {
    /// Streak length required to unlock.
    pub days: u32,
    /// Display label.
    pub label: String,
    /// Whether the given streak has reached the threshold.
    pub unlocked: bool,
}

/// Badge states for a streak against the configured thresholds.
///
/// The default thresholds (3, 7, 14, 30) carry the original badge names;
/// custom thresholds get a generic label.
pub fn achievement_statuses(streak: u32, thresholds: &[u32]) -> Vec<AchievementStatus> {
    thresholds
        .iter()
        .map(|&days| {
            let label = match days {
                3 => "3-Day Spark".to_string(),
                7 => "7-Day Star".to_string(),
                14 => "14-Day Award".to_string(),
                30 => "30-Day Trophy".to_string(),
                other => format!("{other}-Day Streak"),
            };
            AchievementStatus {
                days,
                label,
                unlocked: streak >= days,
            }
        })
        .collect()
}
