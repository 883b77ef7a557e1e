//! Micro-skills: the catalog and the daily assignment rule.

mod catalog;

pub use catalog::builtin_catalog;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::category::Category;

/// A single short, actionable task assigned to a user for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub category: Category,
    pub text: String,
}

/// Pick the next skill for a user: unseen skills only, preferring the user's
/// own category when any unseen skill in it remains, chosen uniformly at
/// random. Returns `None` when every skill has been seen.
pub fn next_skill<'a, R: Rng + ?Sized>(
    catalog: &'a [Skill],
    seen_ids: &HashSet<String>,
    category: Option<Category>,
    rng: &mut R,
) -> Option<&'a Skill> {
    let unseen: Vec<&Skill> = catalog
        .iter()
        .filter(|s| !seen_ids.contains(&s.id))
        .collect();

    if let Some(cat) = category {
        let in_category: Vec<&Skill> = unseen
            .iter()
            .copied()
            .filter(|s| s.category == cat)
            .collect();
        if !in_category.is_empty() {
            return in_category.choose(rng).copied();
        }
    }

    unseen.choose(rng).copied()
}

/// [`next_skill`] with the thread-local RNG.
pub fn pick_next<'a>(
    catalog: &'a [Skill],
    seen_ids: &HashSet<String>,
    category: Option<Category>,
) -> Option<&'a Skill> {
    next_skill(catalog, seen_ids, category, &mut rand::thread_rng())
}
