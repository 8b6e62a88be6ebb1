use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::{expand_tilde, prepare_output};

pub struct ExportLogic;

impl ExportLogic {
    /// Export dei record.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (`~/` is expanded)
    /// - `range`: `None`/`"all"` for everything, otherwise the usual period grammar
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `a:b`)
    ///
    /// Returns the number of exported records.
    pub fn export<S: RecordStore>(
        store: &mut S,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        prepare_output(&path, force)?;

        // unlike `list`, an export without range means the whole archive
        let (from, to) = resolve_period(Some(range.unwrap_or("all")))?;
        let records = store.range(from, to)?;

        if records.is_empty() {
            warning("No records in the selected range; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => write_csv(&path, &records)?,
            ExportFormat::Json => write_json(&path, &records)?,
        }

        let target = path.to_string_lossy().to_string();
        if let Err(e) = store.audit(
            "export",
            &target,
            &format!("{} records as {}", records.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(records.len())
    }
}
