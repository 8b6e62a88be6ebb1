//! SQLite-backed [`RecordStore`].

use crate::core::store::RecordStore;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::models::work_record::WorkRecord;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, id: &str) -> AppResult<Option<WorkRecord>> {
        queries::load_record(&self.pool.conn, id)
    }

    fn get_by_date(&self, date: NaiveDate) -> AppResult<Vec<WorkRecord>> {
        queries::load_records_by_date(&self.pool.conn, &date)
    }

    fn all(&self) -> AppResult<Vec<WorkRecord>> {
        queries::load_all_records(&self.pool.conn)
    }

    fn save(&mut self, record: &WorkRecord) -> AppResult<()> {
        queries::upsert_record(&self.pool.conn, record)
    }

    fn delete(&mut self, id: &str) -> AppResult<bool> {
        queries::delete_record(&self.pool.conn, id)
    }

    fn get_settings(&self) -> AppResult<Settings> {
        Ok(queries::load_settings(&self.pool.conn)?.unwrap_or_default())
    }

    fn save_settings(&mut self, settings: &Settings) -> AppResult<()> {
        queries::save_settings(&self.pool.conn, settings)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }

    fn range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkRecord>> {
        queries::load_records_in_range(&self.pool.conn, &from, &to)
    }
}
