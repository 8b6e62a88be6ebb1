use crate::core::edit::RecordSelector;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::work_record::WorkRecord;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the selected record and return what was deleted.
    pub fn apply<S: RecordStore>(store: &mut S, selector: &RecordSelector) -> AppResult<WorkRecord> {
        let record = selector.resolve(store)?;

        if !store.delete(&record.id)? {
            return Err(AppError::RecordNotFound(record.id));
        }

        if let Err(e) = store.audit(
            "del",
            &record.date_str(),
            &format!("Deleted record {}", record.id),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(record)
    }
}
