use crate::errors::AppResult;
use crate::models::work_record::WorkRecord;
use std::path::Path;

/// Scrive i record in JSON formattato.
pub fn write_json(path: &Path, records: &[WorkRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
