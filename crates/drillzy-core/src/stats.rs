//! Progress analytics derived from the skill history.
//!
//! Everything here is data for the presentation layer: per-day completion
//! counts over the trailing week, completed skills per archetype, and the
//! cumulative completion curve. Like the streak, all of it is derived and
//! never stored.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::Category;
use crate::history::SkillHistoryItem;
use crate::skills::Skill;

/// Completion count for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayProgress {
    pub date: NaiveDate,
    pub completed: u32,
}

/// Completed-skill count for one archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: Category,
    pub completed: u32,
}

/// Running total of completions as of one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub total: u32,
}

/// Completions per day over the seven days ending at `today`, oldest first.
/// Days with no history item report zero.
pub fn weekly_progress(history: &[SkillHistoryItem], today: NaiveDate) -> Vec<DayProgress> {
    let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for item in history.iter().filter(|i| i.completed) {
        *per_day.entry(item.date).or_insert(0) += 1;
    }

    (0..7)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            DayProgress {
                date,
                completed: per_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Completed skills per archetype, in canonical category order. History
/// items whose skill id is not in the catalog are skipped.
pub fn category_breakdown(history: &[SkillHistoryItem], catalog: &[Skill]) -> Vec<CategorySlice> {
    let category_of: HashMap<&str, Category> = catalog
        .iter()
        .map(|s| (s.id.as_str(), s.category))
        .collect();

    let mut counts: HashMap<Category, u32> = HashMap::new();
    for item in history.iter().filter(|i| i.completed) {
        if let Some(cat) = category_of.get(item.skill_id.as_str()) {
            *counts.entry(*cat).or_insert(0) += 1;
        }
    }

    Category::ALL
        .iter()
        .map(|cat| CategorySlice {
            category: *cat,
            completed: counts.get(cat).copied().unwrap_or(0),
        })
        .collect()
}

/// Running completion total per completed date, ascending by date.
pub fn cumulative_completions(history: &[SkillHistoryItem]) -> Vec<CumulativePoint> {
    let mut dates: Vec<NaiveDate> = history
        .iter()
        .filter(|i| i.completed)
        .map(|i| i.date)
        .collect();
    dates.sort();
    dates.dedup();

    let mut total = 0u32;
    dates
        .into_iter()
        .map(|date| {
            total += 1;
            CumulativePoint { date, total }
        })
        .collect()
}
