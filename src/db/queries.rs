use crate::errors::{AppError, AppResult};
use crate::models::settings::{SETTINGS_ID, Settings};
use crate::models::work_record::{Timestamp, WorkRecord};
use crate::models::work_status::WorkStatus;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const RECORD_COLUMNS: &str = "id, date, clock_in, clock_out, break_start, break_end, \
     total_break_minutes, total_work_minutes, status, earnings, created_at, updated_at";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_ts(col: usize, s: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(col, AppError::InvalidTimestamp(s.to_string())))
}

fn get_ts(row: &Row, col: &str, idx: usize) -> Result<Timestamp> {
    let s: String = row.get(col)?;
    parse_ts(idx, &s)
}

fn get_opt_ts(row: &Row, col: &str, idx: usize) -> Result<Option<Timestamp>> {
    let s: Option<String> = row.get(col)?;
    s.filter(|v| !v.is_empty())
        .map(|v| parse_ts(idx, &v))
        .transpose()
}

/// `YYYY-MM-DD`, clamped to four-digit years so that open ranges
/// (`NaiveDate::MIN`/`MAX`) still compare correctly as text.
fn date_key(d: &NaiveDate) -> String {
    let lo = NaiveDate::from_ymd_opt(0, 1, 1).unwrap_or(NaiveDate::MIN);
    let hi = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);
    (*d).clamp(lo, hi).format("%Y-%m-%d").to_string()
}

fn ts_to_db(ts: &Option<Timestamp>) -> Option<String> {
    ts.map(|t| t.to_rfc3339())
}

pub fn map_row(row: &Row) -> Result<WorkRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = WorkStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(8, AppError::InvalidStatus(status_str.clone())))?;

    Ok(WorkRecord {
        id: row.get("id")?,
        date,
        clock_in: get_opt_ts(row, "clock_in", 2)?,
        clock_out: get_opt_ts(row, "clock_out", 3)?,
        break_start: get_opt_ts(row, "break_start", 4)?,
        break_end: get_opt_ts(row, "break_end", 5)?,
        total_break_minutes: row.get("total_break_minutes")?,
        total_work_minutes: row.get("total_work_minutes")?,
        status,
        earnings: row.get("earnings")?,
        created_at: get_ts(row, "created_at", 10)?,
        updated_at: get_ts(row, "updated_at", 11)?,
    })
}

fn collect(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_record(conn: &Connection, id: &str) -> AppResult<Option<WorkRecord>> {
    let sql = format!("SELECT {RECORD_COLUMNS} FROM work_records WHERE id = ?1");
    let rec = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(rec)
}

pub fn load_records_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<WorkRecord>> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM work_records
         WHERE date = ?1
         ORDER BY created_at ASC"
    );
    let date_str = date.format("%Y-%m-%d").to_string();
    collect(conn, &sql, &[&date_str])
}

pub fn load_all_records(conn: &Connection) -> AppResult<Vec<WorkRecord>> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM work_records
         ORDER BY date DESC, created_at DESC"
    );
    collect(conn, &sql, &[])
}

pub fn load_records_in_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<WorkRecord>> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM work_records
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC, created_at ASC"
    );
    collect(conn, &sql, &[&date_key(from), &date_key(to)])
}

/// Insert or replace a record by id.
pub fn upsert_record(conn: &Connection, r: &WorkRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_records
            (id, date, clock_in, clock_out, break_start, break_end,
             total_break_minutes, total_work_minutes, status, earnings, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(id) DO UPDATE SET
            date = excluded.date,
            clock_in = excluded.clock_in,
            clock_out = excluded.clock_out,
            break_start = excluded.break_start,
            break_end = excluded.break_end,
            total_break_minutes = excluded.total_break_minutes,
            total_work_minutes = excluded.total_work_minutes,
            status = excluded.status,
            earnings = excluded.earnings,
            created_at = excluded.created_at,
            updated_at = excluded.updated_at",
        params![
            r.id,
            r.date_str(),
            ts_to_db(&r.clock_in),
            ts_to_db(&r.clock_out),
            ts_to_db(&r.break_start),
            ts_to_db(&r.break_end),
            r.total_break_minutes,
            r.total_work_minutes,
            r.status.to_db_str(),
            r.earnings,
            r.created_at.to_rfc3339(),
            r.updated_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_record(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM work_records WHERE id = ?1", [id])?;
    Ok(n > 0)
}

pub fn load_settings(conn: &Connection) -> AppResult<Option<Settings>> {
    let row = conn
        .query_row(
            "SELECT id, hourly_rate, overtime_rate, target_minutes_per_day, created_at, updated_at
             FROM settings WHERE id = ?1",
            [SETTINGS_ID],
            |row| {
                Ok(Settings {
                    id: row.get("id")?,
                    hourly_rate: row.get("hourly_rate")?,
                    overtime_rate: row.get("overtime_rate")?,
                    target_minutes_per_day: row.get("target_minutes_per_day")?,
                    created_at: get_ts(row, "created_at", 4)?,
                    updated_at: get_ts(row, "updated_at", 5)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

pub fn save_settings(conn: &Connection, s: &Settings) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings
            (id, hourly_rate, overtime_rate, target_minutes_per_day, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            hourly_rate = excluded.hourly_rate,
            overtime_rate = excluded.overtime_rate,
            target_minutes_per_day = excluded.target_minutes_per_day,
            updated_at = excluded.updated_at",
        params![
            SETTINGS_ID,
            s.hourly_rate,
            s.overtime_rate,
            s.target_minutes_per_day,
            s.created_at.to_rfc3339(),
            s.updated_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}
