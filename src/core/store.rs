//! Storage contract used by the command logic, plus an in-memory implementation.

use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::models::work_record::WorkRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Read/write access to work records and the settings row.
///
/// `save` takes `&mut self`: whoever holds the store is the single writer,
/// which is what keeps read-modify-write sequences from losing updates.
pub trait RecordStore {
    fn get(&self, id: &str) -> AppResult<Option<WorkRecord>>;

    /// Records whose `date` equals `date`, oldest first.
    fn get_by_date(&self, date: NaiveDate) -> AppResult<Vec<WorkRecord>>;

    /// Every record, newest date first.
    fn all(&self) -> AppResult<Vec<WorkRecord>>;

    /// Insert or replace by id (last write wins).
    fn save(&mut self, record: &WorkRecord) -> AppResult<()>;

    /// Returns `true` when something was removed.
    fn delete(&mut self, id: &str) -> AppResult<bool>;

    fn get_settings(&self) -> AppResult<Settings>;

    fn save_settings(&mut self, settings: &Settings) -> AppResult<()>;

    /// Append a line to the audit trail.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;

    /// Records with `from <= date <= to`, oldest first.
    fn range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkRecord>> {
        let mut out: Vec<WorkRecord> = self
            .all()?
            .into_iter()
            .filter(|r| r.date >= from && r.date <= to)
            .collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(out)
    }
}

/// Process-local store. Constructed explicitly and handed to whoever needs it.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    records: HashMap<String, WorkRecord>,
    settings: Settings,
    audit: Vec<AuditEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            records: HashMap::new(),
            settings,
            audit: Vec::new(),
        }
    }

    pub fn audit_entries(&self) -> &[AuditEntry] {
        &self.audit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemStore {
    fn get(&self, id: &str) -> AppResult<Option<WorkRecord>> {
        Ok(self.records.get(id).cloned())
    }

    fn get_by_date(&self, date: NaiveDate) -> AppResult<Vec<WorkRecord>> {
        let mut out: Vec<WorkRecord> = self
            .records
            .values()
            .filter(|r| r.date == date)
            .cloned()
            .collect();
        out.sort_by_key(|r| r.created_at);
        Ok(out)
    }

    fn all(&self) -> AppResult<Vec<WorkRecord>> {
        let mut out: Vec<WorkRecord> = self.records.values().cloned().collect();
        out.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(out)
    }

    fn save(&mut self, record: &WorkRecord) -> AppResult<()> {
        self.records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> AppResult<bool> {
        Ok(self.records.remove(id).is_some())
    }

    fn get_settings(&self) -> AppResult<Settings> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: &Settings) -> AppResult<()> {
        self.settings = settings.clone();
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit.push(AuditEntry {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
