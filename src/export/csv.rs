use super::model::{RecordExport, get_headers, record_to_row};
use crate::errors::AppResult;
use crate::models::work_record::WorkRecord;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Spreadsheet apps need the BOM to pick UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Scrive i record in CSV nel file indicato.
pub fn write_csv(path: &Path, records: &[WorkRecord]) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut wtr = Writer::from_writer(file);
    wtr.write_record(get_headers())?;

    for r in records {
        wtr.write_record(record_to_row(&RecordExport::from(r)))?;
    }

    wtr.flush()?;
    Ok(())
}
