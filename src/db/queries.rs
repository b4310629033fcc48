use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Attendee, Event};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

const EVENT_COLUMNS: &str = "id, title, event_date,
         COALESCE(location, '') AS location,
         COALESCE(topic, '') AS topic";

/// Stored dates are expected in ISO form. A bad one fails the read and the
/// error names the event row holding it.
fn parse_stored_date(idx: usize, event_id: i64, raw: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStoredDate {
                id: event_id,
                value: raw,
            }),
        )
    })
}

pub fn map_event_row(row: &Row) -> Result<Event> {
    let id: i64 = row.get("id")?;
    let raw_date: String = row.get("event_date")?;

    Ok(Event {
        id,
        title: row.get("title")?,
        event_date: parse_stored_date(2, id, raw_date)?,
        location: row.get("location")?,
        topic: row.get("topic")?,
    })
}

pub fn map_attendee_row(row: &Row) -> Result<Attendee> {
    Ok(Attendee {
        id: row.get("id")?,
        event_id: row.get("event_id")?,
        name: row.get("name")?,
        gender: row.get("gender")?,
        province: row.get("province")?,
    })
}

pub fn map_attendance_row(row: &Row) -> Result<AttendanceRecord> {
    let event_id: i64 = row.get("event_id")?;
    let raw_date: String = row.get("event_date")?;

    Ok(AttendanceRecord {
        event_title: row.get("event_title")?,
        event_date: parse_stored_date(1, event_id, raw_date)?,
        gender: row.get("gender")?,
        province: row.get("province")?,
    })
}

pub fn insert_event(
    conn: &Connection,
    title: &str,
    event_date: NaiveDate,
    location: &str,
    topic: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, event_date, location, topic)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            title,
            event_date.format(DATE_FMT).to_string(),
            location,
            topic
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {EVENT_COLUMNS} FROM events ORDER BY id ASC"
    ))?;

    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let ev = conn
        .query_row(
            &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"),
            [id],
            map_event_row,
        )
        .optional()?;
    Ok(ev)
}

pub fn count_events(conn: &Connection) -> AppResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(count.max(0) as usize)
}

pub fn insert_attendee(
    conn: &Connection,
    event_id: i64,
    name: &str,
    gender: &str,
    province: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendees (event_id, name, gender, province)
         VALUES (?1, ?2, ?3, ?4)",
        params![event_id, name, gender, province],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_attendees(conn: &Connection, event_id: Option<i64>) -> AppResult<Vec<Attendee>> {
    let mut stmt = conn.prepare(
        "SELECT id, event_id, name,
                COALESCE(gender, '') AS gender,
                COALESCE(province, '') AS province
         FROM attendees
         WHERE ?1 IS NULL OR event_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([event_id], map_attendee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One record per attendee, joined to its event. Inner join: events with no
/// attendees produce no records.
pub fn load_attendance(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT e.title AS event_title,
                e.event_date AS event_date,
                e.id AS event_id,
                COALESCE(a.gender, '') AS gender,
                COALESCE(a.province, '') AS province
         FROM attendees AS a
         JOIN events AS e ON a.event_id = e.id
         ORDER BY a.id ASC",
    )?;

    let rows = stmt.query_map([], map_attendance_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
