//! # Drillzy Core Library
//!
//! Core business logic for Drillzy, the daily micro-skill habit builder.
//! A short intake survey sorts each user into one of four archetypes
//! (thinker, builder, creator, connector); the user then receives one
//! micro-skill per calendar day, tracked by a streak counter and progress
//! charts. This crate is CLI-first: all operations are available through
//! the standalone `drillzy` binary.
//!
//! ## Key Components
//!
//! - [`Categorizer`]: scores a completed survey into one archetype.
//!   [`TallyCategorizer`] is the deterministic default;
//!   [`GenerativeCategorizer`] is an optional backend-assisted variant that
//!   always falls back to the tally rule.
//! - [`streak_on`]: pure streak computation over an immutable history
//!   snapshot. The streak is derived, never stored.
//! - [`Database`]: SQLite persistence for profiles, the skill catalog, and
//!   per-day history.
//! - [`Config`]: TOML application configuration.

pub mod category;
pub mod error;
pub mod history;
pub mod reminders;
pub mod skills;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod survey;

pub use category::Category;
pub use error::{ConfigError, CoreError, DatabaseError, SurveyError};
pub use history::SkillHistoryItem;
pub use skills::{builtin_catalog, next_skill, pick_next, Skill};
pub use storage::{Config, Database, Profile};
pub use streak::{achievement_statuses, current_streak, streak_on, AchievementStatus};
pub use survey::{
    default_questions, validate_answers, Categorizer, CategoryAssignment, GenerativeCategorizer,
    SurveyAnswer, SurveyQuestion, TallyCategorizer,
};
