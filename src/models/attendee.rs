use serde::Serialize;

/// A person registered against exactly one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendee {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub gender: String,
    pub province: String,
}
