use chrono::NaiveDate;
use serde::Serialize;

/// Join projection of an attendee and its event, used only for reporting.
///
/// Field order is the CSV/JSON column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub event_title: String,
    pub event_date: NaiveDate,
    pub gender: String,
    pub province: String,
}
