use crate::errors::AppResult;
use serde::Serialize;

/// Render `records` as a pretty-printed JSON array.
pub fn to_json<T: Serialize>(records: &[T]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
