//! Unified application error type.
//! Store, reporting, export and CLI code all return AppError so failures
//! surface to `main` the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Legacy `date` -> `event_date` rename rejected by SQLite.
    /// Reported as a warning, never fatal.
    #[error("Legacy schema rename failed: {0}")]
    SchemaRename(String),

    #[error("Event #{id} has an unreadable date '{value}' (expected YYYY-MM-DD)")]
    InvalidStoredDate { id: i64, value: String },

    // ---------------------------
    // Caller input
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No event with id {0}")]
    UnknownEvent(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
