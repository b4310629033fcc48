mod common;
use agrimpact::db::{SchemaState, Store};
use agrimpact::errors::AppError;
use common::{date, fresh_store, seed_soil_health_day, setup_test_db};
use rusqlite::Connection;
use std::env;
use std::fs;

fn table_count(store: &Store, name: &str) -> i64 {
    let conn = Connection::open(store.path()).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |row| row.get(0),
    )
    .expect("count tables")
}

fn events_columns(store: &Store) -> Vec<String> {
    let conn = Connection::open(store.path()).expect("open db");
    let mut stmt = conn.prepare("PRAGMA table_info('events')").unwrap();
    stmt.query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .map(|c| c.unwrap())
        .collect()
}

fn legacy_store(name: &str, extra_sql: &str) -> Store {
    let path = setup_test_db(name);
    let conn = Connection::open(&path).expect("open db");
    conn.execute_batch(&format!(
        "CREATE TABLE events (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             title TEXT NOT NULL,
             date TEXT NOT NULL,
             location TEXT,
             topic TEXT
         );
         INSERT INTO events (title, date, location, topic)
         VALUES ('Seed Fair', '2023-11-20', 'Kisumu', 'seeds');
         {extra_sql}"
    ))
    .expect("legacy schema");
    drop(conn);
    Store::new(path)
}

#[test]
fn initialize_twice_is_idempotent() {
    let store = Store::new(setup_test_db("init_twice"));

    assert_eq!(store.initialize().unwrap(), SchemaState::Current);
    assert_eq!(store.initialize().unwrap(), SchemaState::Current);

    assert_eq!(table_count(&store, "events"), 1);
    assert_eq!(table_count(&store, "attendees"), 1);
}

#[test]
fn initialize_creates_missing_parent_directory() {
    let dir = env::temp_dir().join("agrimpact_nested_init");
    fs::remove_dir_all(&dir).ok();
    let path = dir.join("data").join("database.db");

    let store = Store::new(&path);
    store.initialize().expect("initialize");

    assert!(path.exists());
}

#[test]
fn unreadable_stored_date_names_the_event() {
    let store = fresh_store("bad_stored_date");
    seed_soil_health_day(&store);

    let conn = Connection::open(store.path()).expect("open db");
    conn.execute(
        "INSERT INTO events (title, event_date, location, topic)
         VALUES ('Old Import', '01/03/2024', '', '')",
        [],
    )
    .unwrap();
    let bad_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO attendees (event_id, name, gender, province) VALUES (?1, 'Baraka', 'Male', '')",
        [bad_id],
    )
    .unwrap();
    drop(conn);

    let err = store.get_events().unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
    let msg = err.to_string();
    assert!(msg.contains(&format!("Event #{bad_id}")), "{msg}");
    assert!(msg.contains("01/03/2024"), "{msg}");

    let err = store.get_attendance_data().unwrap_err();
    assert!(err.to_string().contains(&format!("Event #{bad_id}")));
}

#[test]
fn get_events_returns_what_was_added_with_fresh_ids() {
    let store = fresh_store("events_roundtrip");

    let added = [
        ("Soil Health Day", "2024-03-01", "Nairobi", "soil"),
        ("Drip Irrigation Demo", "2024-04-12", "", ""),
        ("Soil Health Day", "2024-05-30", "Nakuru", "soil"),
    ];

    let mut ids = Vec::new();
    for (title, d, location, topic) in added {
        ids.push(store.add_event(title, date(d), location, topic).unwrap());
    }

    let events = store.get_events().unwrap();
    assert_eq!(events.len(), added.len());

    for (ev, (title, d, location, topic)) in events.iter().zip(added) {
        assert_eq!(ev.title, title);
        assert_eq!(ev.event_date, date(d));
        assert_eq!(ev.location, location);
        assert_eq!(ev.topic, topic);
    }

    let returned: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(returned, ids);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn separate_store_values_see_the_same_file() {
    let path = setup_test_db("shared_file");
    let writer = Store::new(&path);
    writer.initialize().unwrap();
    writer
        .add_event("Farmer Field School", date("2024-06-01"), "Embu", "maize")
        .unwrap();

    let reader = Store::new(&path);
    assert_eq!(reader.get_events().unwrap().len(), 1);
    assert_eq!(reader.count_events().unwrap(), 1);
}

#[test]
fn get_event_by_id() {
    let store = fresh_store("event_by_id");
    let id = store
        .add_event("Seed Fair", date("2024-02-02"), "Kisumu", "")
        .unwrap();

    let ev = store.get_event(id).unwrap().expect("event exists");
    assert_eq!(ev.title, "Seed Fair");
    assert_eq!(ev.label(), "Seed Fair (2024-02-02)");

    assert!(store.get_event(id + 100).unwrap().is_none());
}

#[test]
fn attendance_joins_attendees_to_their_event() {
    let store = fresh_store("attendance_join");
    seed_soil_health_day(&store);

    let records = store.get_attendance_data().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].event_title, "Soil Health Day");
    assert_eq!(records[0].event_date, date("2024-03-01"));
    assert_eq!(records[0].gender, "Female");
    assert_eq!(records[0].province, "Nairobi");

    assert_eq!(records[1].gender, "Male");
    assert_eq!(records[1].province, "Kiambu");
}

#[test]
fn events_without_attendees_produce_no_records() {
    let store = fresh_store("attendance_empty_event");
    store
        .add_event("Empty Hall", date("2024-01-10"), "Machakos", "")
        .unwrap();

    assert!(store.get_attendance_data().unwrap().is_empty());

    seed_soil_health_day(&store);
    let records = store.get_attendance_data().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.event_title == "Soil Health Day"));
}

#[test]
fn attendees_can_be_listed_per_event() {
    let store = fresh_store("attendees_list");
    let soil = seed_soil_health_day(&store);
    let other = store
        .add_event("Dairy Day", date("2024-07-07"), "Nyeri", "dairy")
        .unwrap();
    store.add_attendee(other, "Wanjiru", "Female", "").unwrap();

    assert_eq!(store.get_attendees(None).unwrap().len(), 3);

    let soil_only = store.get_attendees(Some(soil)).unwrap();
    let names: Vec<&str> = soil_only.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Amina", "Kofi"]);

    let dairy = store.get_attendees(Some(other)).unwrap();
    assert_eq!(dairy[0].province, "");
}

#[test]
fn attendee_with_unknown_event_is_rejected_by_the_database() {
    let store = fresh_store("attendee_unknown_event");
    let err = store.add_attendee(42, "Ghost", "Other", "").unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
    assert!(store.get_attendance_data().unwrap().is_empty());
}

#[test]
fn legacy_date_column_is_renamed() {
    let store = legacy_store("legacy_rename", "");

    assert_eq!(store.initialize().unwrap(), SchemaState::Renamed);

    let cols = events_columns(&store);
    assert!(cols.contains(&"event_date".to_string()));
    assert!(!cols.contains(&"date".to_string()));

    let events = store.get_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_date, date("2023-11-20"));

    // second run sees the current shape
    assert_eq!(store.initialize().unwrap(), SchemaState::Current);
}

#[test]
fn rejected_legacy_rename_does_not_fail_initialize() {
    // A view over a dropped table makes SQLite refuse any column rename.
    let store = legacy_store(
        "legacy_rename_rejected",
        "CREATE TABLE scratch (x INTEGER);
         CREATE VIEW stale AS SELECT x FROM scratch;
         DROP TABLE scratch;",
    );

    assert_eq!(store.initialize().unwrap(), SchemaState::LegacyRenameFailed);

    let cols = events_columns(&store);
    assert!(cols.contains(&"date".to_string()));
    assert_eq!(table_count(&store, "attendees"), 1);

    let log = store.get_log().unwrap();
    assert!(log.iter().any(|e| e.operation == "migration_skipped"));
}

#[test]
fn audit_log_keeps_insertion_order() {
    let store = fresh_store("audit_log");
    store.log("init", "", "first").unwrap();
    store.log("export", "csv", "second").unwrap();

    let log = store.get_log().unwrap();
    let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
    assert_eq!(log[1].target, "csv");
}
