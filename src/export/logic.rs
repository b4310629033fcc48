use crate::db::Store;
use crate::errors::AppResult;
use crate::export::csv::to_csv;
use crate::export::fs_utils::{ensure_writable, write_text};
use crate::export::json::to_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::{info, warning};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every attendance record to `file`. Returns the number of rows.
    ///
    /// An empty dataset still produces a file: empty for CSV, `[]` for JSON.
    pub fn export(store: &Store, format: &ExportFormat, file: &Path, force: bool) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let records = store.get_attendance_data()?;
        if records.is_empty() {
            info("No attendance data available.");
        }

        let (label, content) = match format {
            ExportFormat::Csv => ("CSV", to_csv(&records)?),
            ExportFormat::Json => ("JSON", to_json(&records)?),
        };

        write_text(file, &content)?;
        notify_export_success(label, records.len(), file);

        if let Err(e) = store.log(
            "export",
            format.as_str(),
            &format!("{} record(s) to {}", records.len(), file.display()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(records.len())
    }
}
