use crate::errors::{AppError, AppResult};
use ::csv::{Terminator, WriterBuilder};
use serde::Serialize;

/// Render `records` as CSV text.
///
/// The header row comes from the record's field names in declaration order.
/// An empty slice renders as an empty string, not a header-only document.
pub fn to_csv<T: Serialize>(records: &[T]) -> AppResult<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for r in records {
        wtr.serialize(r)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}
