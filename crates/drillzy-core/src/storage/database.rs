//! SQLite-backed storage for profiles, the skill catalog, and per-day
//! skill history.
//!
//! The history table enforces the one-item-per-user-per-date invariant with
//! a UNIQUE constraint; assignment uses INSERT OR IGNORE so a second
//! assignment for the same day is a no-op.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::{data_dir, migrations};
use crate::category::Category;
use crate::error::{CoreError, DatabaseError};
use crate::history::SkillHistoryItem;
use crate::skills::{builtin_catalog, Skill};

const DATE_FMT: &str = "%Y-%m-%d";

/// A user profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    /// Unset until the first survey submission; overwritten by later ones.
    pub category: Option<Category>,
}

fn parse_category(s: Option<String>) -> Option<Category> {
    s.as_deref().and_then(Category::parse)
}

/// SQLite database for drillzy data.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/drillzy/drillzy.db`.
    ///
    /// Creates the file, applies migrations, and seeds the built-in skill
    /// catalog if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("drillzy.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        migrations::migrate(&db.conn)?;
        db.seed_builtin_skills()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        migrations::migrate(&db.conn)?;
        db.seed_builtin_skills()?;
        Ok(db)
    }

    /// Insert any built-in skills not already present.
    fn seed_builtin_skills(&self) -> Result<(), DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("INSERT OR IGNORE INTO skills (id, category, text) VALUES (?1, ?2, ?3)")?;
        for skill in builtin_catalog() {
            stmt.execute(params![skill.id, skill.category.as_str(), skill.text])?;
        }
        Ok(())
    }

    // === Profiles ===

    /// Create a profile with a fresh id.
    pub fn create_profile(&self, name: &str) -> Result<Profile, DatabaseError> {
        let profile = Profile {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: None,
        };
        self.conn.execute(
            "INSERT INTO profiles (id, name, category) VALUES (?1, ?2, NULL)",
            params![profile.id, profile.name],
        )?;
        Ok(profile)
    }

    pub fn get_profile(&self, id: &str) -> Result<Option<Profile>, DatabaseError> {
        let profile = self
            .conn
            .query_row(
                "SELECT id, name, category FROM profiles WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Profile {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        category: parse_category(row.get(2)?),
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    pub fn set_profile_name(&self, id: &str, name: &str) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE profiles SET name = ?2 WHERE id = ?1",
            params![id, name],
        )?;
        Ok(changed > 0)
    }

    /// Persist a survey result onto the profile. Overwrites any earlier
    /// category.
    pub fn set_profile_category(
        &self,
        id: &str,
        category: Category,
    ) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE profiles SET category = ?2 WHERE id = ?1",
            params![id, category.as_str()],
        )?;
        Ok(changed > 0)
    }

    // === Skill catalog ===

    /// Look up a skill by id.
    ///
    /// Returns `None` when the id is unknown or the stored category label is
    /// not one of the four archetypes, matching the malformed-row policy of
    /// [`Database::history`].
    pub fn get_skill(&self, id: &str) -> Result<Option<Skill>, DatabaseError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, category, text FROM skills WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;
        Ok(row.and_then(|(id, category_str, text)| {
            Category::parse(&category_str).map(|category| Skill { id, category, text })
        }))
    }

    /// All skills, ordered by id.
    ///
    /// Rows whose stored category label is not one of the four archetypes
    /// are skipped.
    pub fn all_skills(&self) -> Result<Vec<Skill>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, text FROM skills ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut skills = Vec::new();
        for row in rows {
            let (id, category_str, text) = row?;
            if let Some(category) = Category::parse(&category_str) {
                skills.push(Skill { id, category, text });
            }
        }
        Ok(skills)
    }

    // === Skill history ===

    /// Assign a skill for the given day. Returns false if the day already
    /// has an assignment (the existing row is left untouched).
    pub fn assign_skill(
        &self,
        user_id: &str,
        date: NaiveDate,
        skill_id: &str,
    ) -> Result<bool, DatabaseError> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO skill_history (user_id, date, skill_id, completed)
             VALUES (?1, ?2, ?3, 0)",
            params![user_id, date.format(DATE_FMT).to_string(), skill_id],
        )?;
        Ok(inserted > 0)
    }

    /// Mark the given day's skill completed. Returns false if no skill is
    /// assigned for that day.
    pub fn complete_skill(&self, user_id: &str, date: NaiveDate) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE skill_history SET completed = 1 WHERE user_id = ?1 AND date = ?2",
            params![user_id, date.format(DATE_FMT).to_string()],
        )?;
        Ok(changed > 0)
    }

    /// Swap the given day's skill for a new one, provided it has not been
    /// completed yet. Returns false if nothing was replaced.
    pub fn replace_skill(
        &self,
        user_id: &str,
        date: NaiveDate,
        new_skill_id: &str,
    ) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE skill_history SET skill_id = ?3
             WHERE user_id = ?1 AND date = ?2 AND completed = 0",
            params![
                user_id,
                date.format(DATE_FMT).to_string(),
                new_skill_id
            ],
        )?;
        Ok(changed > 0)
    }

    /// Load the full history for a user, newest first.
    ///
    /// Rows whose stored date does not parse as `YYYY-MM-DD` are skipped, so
    /// downstream calculations only ever see typed dates.
    pub fn history(&self, user_id: &str) -> Result<Vec<SkillHistoryItem>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, date, skill_id, completed
             FROM skill_history WHERE user_id = ?1 ORDER BY date DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
            ))
        })?;

        let mut items = Vec::new();
        for row in rows {
            let (user_id, date_str, skill_id, completed) = row?;
            if let Ok(date) = NaiveDate::parse_from_str(&date_str, DATE_FMT) {
                items.push(SkillHistoryItem {
                    user_id,
                    date,
                    skill_id,
                    completed,
                });
            }
        }
        Ok(items)
    }

    /// Ids of every skill ever assigned to the user.
    pub fn seen_skill_ids(&self, user_id: &str) -> Result<HashSet<String>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT skill_id FROM skill_history WHERE user_id = ?1")?;
        let rows = stmt.query_map(params![user_id], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<Result<HashSet<_>, rusqlite::Error>>()?)
    }

    // === KV store ===

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
