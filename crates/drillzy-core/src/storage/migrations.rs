//! Database schema migrations for drillzy.
//!
//! Migrations are versioned and applied automatically when opening the
//! database. The `schema_version` table tracks the current version.

use rusqlite::{Connection, Result as SqliteResult};

use crate::error::DatabaseError;

/// Apply all pending migrations.
///
/// # Errors
/// Returns [`DatabaseError::MigrationFailed`] if a migration fails.
pub fn migrate(conn: &Connection) -> Result<(), DatabaseError> {
    apply(conn).map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
}

fn apply(conn: &Connection) -> SqliteResult<()> {
    create_schema_version_table(conn)?;

    let current_version = get_schema_version(conn);

    if current_version < 1 {
        migrate_v1(conn)?;
    }
    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

/// Returns 0 for a fresh database.
fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i32>>(0)
    })
    .ok()
    .flatten()
    .unwrap_or(0)
}

fn set_schema_version(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// v1: profiles, skills, per-day history, and the kv store.
fn migrate_v1(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profiles (
            id       TEXT PRIMARY KEY,
            name     TEXT NOT NULL,
            category TEXT
        );

        CREATE TABLE IF NOT EXISTS skills (
            id       TEXT PRIMARY KEY,
            category TEXT NOT NULL,
            text     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS skill_history (
            user_id   TEXT NOT NULL,
            date      TEXT NOT NULL,
            skill_id  TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            UNIQUE(user_id, date)
        );

        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;
    set_schema_version(conn, 1)
}

/// v2: index for history scans ordered by date.
fn migrate_v2(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_skill_history_user_date
             ON skill_history(user_id, date);
         CREATE INDEX IF NOT EXISTS idx_skills_category
             ON skills(category);",
    )?;
    set_schema_version(conn, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn), 2);
    }

    #[test]
    fn tables_exist_after_migration() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        for table in ["profiles", "skills", "skill_history", "kv"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {table}");
        }
    }

    #[test]
    fn migration_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readonly.db");
        std::fs::File::create(&path).unwrap();
        let conn =
            Connection::open_with_flags(&path, rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY)
                .unwrap();
        assert!(matches!(
            migrate(&conn),
            Err(DatabaseError::MigrationFailed(_))
        ));
    }

    #[test]
    fn history_unique_per_user_and_date() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        conn.execute(
            "INSERT INTO skill_history (user_id, date, skill_id) VALUES ('u1', '2026-08-29', 's1')",
            [],
        )
        .unwrap();
        let dup = conn.execute(
            "INSERT INTO skill_history (user_id, date, skill_id) VALUES ('u1', '2026-08-29', 's2')",
            [],
        );
        assert!(dup.is_err());
    }
}
