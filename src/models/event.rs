use chrono::NaiveDate;
use serde::Serialize;

/// A recorded outreach activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub topic: String,
}

impl Event {
    /// Label used when the operator picks an event, e.g. `Soil Health Day (2024-03-01)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.event_date.format("%Y-%m-%d"))
    }
}
