//! Store: owns the database path and hands out one connection per operation.

use crate::db::log::{self, LogEntry};
use crate::db::queries;
use crate::db::schema::{self, SchemaState};
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, Attendee, Event};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Run `func` on a fresh connection.
    ///
    /// The connection is closed when this returns, whether `func` succeeded or not.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let conn = self.connect()?;
        func(&conn)
    }

    /// Create the database file, its parent directory and the schema.
    /// Safe to call on every startup.
    pub fn initialize(&self) -> AppResult<SchemaState> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        self.with_conn(schema::init_schema)
    }

    pub fn add_event(
        &self,
        title: &str,
        event_date: NaiveDate,
        location: &str,
        topic: &str,
    ) -> AppResult<i64> {
        self.with_conn(|conn| queries::insert_event(conn, title, event_date, location, topic))
    }

    pub fn get_events(&self) -> AppResult<Vec<Event>> {
        self.with_conn(queries::load_events)
    }

    pub fn get_event(&self, id: i64) -> AppResult<Option<Event>> {
        self.with_conn(|conn| queries::load_event(conn, id))
    }

    pub fn count_events(&self) -> AppResult<usize> {
        self.with_conn(queries::count_events)
    }

    pub fn add_attendee(
        &self,
        event_id: i64,
        name: &str,
        gender: &str,
        province: &str,
    ) -> AppResult<i64> {
        self.with_conn(|conn| queries::insert_attendee(conn, event_id, name, gender, province))
    }

    /// Attendees, optionally restricted to one event.
    pub fn get_attendees(&self, event_id: Option<i64>) -> AppResult<Vec<Attendee>> {
        self.with_conn(|conn| queries::load_attendees(conn, event_id))
    }

    /// Inner join of attendees to their events. Events without attendees yield nothing.
    pub fn get_attendance_data(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.with_conn(queries::load_attendance)
    }

    /// Append a row to the audit log.
    pub fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.with_conn(|conn| log::write_log(conn, operation, target, message))
    }

    pub fn get_log(&self) -> AppResult<Vec<LogEntry>> {
        self.with_conn(log::load_log)
    }
}
