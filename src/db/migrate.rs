use crate::core::calculator::DEFAULT_STANDARD_MINUTES;
use crate::models::settings::{DEFAULT_HOURLY_RATE, DEFAULT_OVERTIME_RATE, SETTINGS_ID};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `work_records` table (one row per day).
fn create_work_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_records (
            id                   TEXT PRIMARY KEY,
            date                 TEXT NOT NULL,
            clock_in             TEXT,
            clock_out            TEXT,
            break_start          TEXT,
            break_end            TEXT,
            total_break_minutes  INTEGER NOT NULL DEFAULT 0,
            total_work_minutes   INTEGER NOT NULL DEFAULT 0,
            status               TEXT NOT NULL DEFAULT 'not_started'
                                 CHECK(status IN ('not_started','working','on_break','finished')),
            earnings             INTEGER NOT NULL DEFAULT 0,
            created_at           TEXT NOT NULL,
            updated_at           TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the singleton `settings` table.
fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id                      TEXT PRIMARY KEY,
            hourly_rate             REAL NOT NULL,
            overtime_rate           REAL NOT NULL,
            target_minutes_per_day  INTEGER NOT NULL,
            created_at              TEXT NOT NULL,
            updated_at              TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Index for lookups by day.
fn migrate_add_date_index(conn: &Connection) -> Result<()> {
    let version = "20251016_0001_work_records_date_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_work_records_date ON work_records(date);",
    )?;
    mark_applied(conn, version, "Added date index to work_records")?;

    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Seed the settings row with the default pay rates.
fn migrate_seed_settings(conn: &Connection) -> Result<()> {
    let version = "20251016_0002_seed_default_settings";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT OR IGNORE INTO settings
            (id, hourly_rate, overtime_rate, target_minutes_per_day, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![
            SETTINGS_ID,
            DEFAULT_HOURLY_RATE,
            DEFAULT_OVERTIME_RATE,
            DEFAULT_STANDARD_MINUTES,
            now
        ],
    )?;
    mark_applied(conn, version, "Seeded default settings")?;

    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base tables
    if !table_exists(conn, "work_records")? {
        create_work_records_table(conn)?;
        success("Created work_records table.");
    }
    if !table_exists(conn, "settings")? {
        create_settings_table(conn)?;
        success("Created settings table.");
    }

    // 3) Named migrations, each recorded in `log`
    migrate_add_date_index(conn)?;
    migrate_seed_settings(conn)?;

    Ok(())
}
