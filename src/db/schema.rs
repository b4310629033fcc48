use crate::db::log::write_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Outcome of schema initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    /// Tables already had (or were created with) the current shape.
    Current,
    /// A legacy `events.date` column was renamed to `event_date`.
    Renamed,
    /// The legacy rename was attempted and rejected; the old shape is kept.
    LegacyRenameFailed,
}

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT NOT NULL,
        event_date  TEXT NOT NULL,
        location    TEXT,
        topic       TEXT
    );

    CREATE TABLE IF NOT EXISTS attendees (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id    INTEGER NOT NULL,
        name        TEXT NOT NULL,
        gender      TEXT,
        province    TEXT,
        FOREIGN KEY (event_id) REFERENCES events(id)
    );

    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
"#;

/// Column names of the `events` table, in declaration order.
fn events_columns(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

/// Older databases stored the event date in a column called `date`.
fn needs_date_rename(conn: &Connection) -> rusqlite::Result<bool> {
    let cols = events_columns(conn)?;
    let has = |name: &str| cols.iter().any(|c| c == name);
    Ok(has("date") && !has("event_date"))
}

fn rename_legacy_date_column(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("ALTER TABLE events RENAME COLUMN date TO event_date;")
        .map_err(|e| AppError::SchemaRename(e.to_string()))
}

/// Create all tables and apply the one legacy rename.
///
/// A rejected rename is reported and recorded in the audit log but does not
/// fail initialization.
pub fn init_schema(conn: &Connection) -> AppResult<SchemaState> {
    conn.execute_batch(SCHEMA)?;

    if !needs_date_rename(conn)? {
        return Ok(SchemaState::Current);
    }

    match rename_legacy_date_column(conn) {
        Ok(()) => {
            success("Renamed legacy column events.date to events.event_date.");
            if let Err(e) = write_log(
                conn,
                "migration_applied",
                "events.event_date",
                "Renamed column date to event_date",
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }
            Ok(SchemaState::Renamed)
        }
        Err(e) => {
            warning(format!("{}. Continuing with the existing events table.", e));
            if let Err(le) = write_log(conn, "migration_skipped", "events.event_date", &e.to_string())
            {
                warning(format!("Failed to write internal log: {}", le));
            }
            Ok(SchemaState::LegacyRenameFailed)
        }
    }
}
