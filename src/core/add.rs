use crate::config::Config;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

/// High-level logic for recording events and registering attendees.
///
/// Input is checked here, before it reaches the store; the store itself
/// trusts its callers.
pub struct AddLogic;

fn required(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(v.to_string())
}

/// Match `input` against the configured gender labels, case-insensitively,
/// returning the canonical label.
pub fn resolve_gender(input: &str, labels: &[String]) -> AppResult<String> {
    let wanted = input.trim();
    labels
        .iter()
        .find(|l| l.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Unknown gender '{}'. Use one of: {}",
                input,
                labels.join(", ")
            ))
        })
}

fn audit(store: &Store, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.log(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

impl AddLogic {
    pub fn add_event(
        store: &Store,
        title: &str,
        event_date: NaiveDate,
        location: &str,
        topic: &str,
    ) -> AppResult<i64> {
        let title = required("Event title", title)?;

        let id = store.add_event(&title, event_date, location.trim(), topic.trim())?;

        success(format!("Event #{} '{}' added for {}.", id, title, event_date));
        audit(
            store,
            "add_event",
            &id.to_string(),
            &format!("{} ({})", title, event_date),
        );

        Ok(id)
    }

    pub fn register_attendee(
        store: &Store,
        cfg: &Config,
        event_id: i64,
        name: &str,
        gender: &str,
        province: &str,
    ) -> AppResult<i64> {
        let name = required("Attendee name", name)?;
        let gender = resolve_gender(gender, &cfg.genders)?;

        let event = store
            .get_event(event_id)?
            .ok_or(AppError::UnknownEvent(event_id))?;

        let id = store.add_attendee(event.id, &name, &gender, province.trim())?;

        success(format!("{} registered for {}.", name, event.label()));
        audit(
            store,
            "add_attendee",
            &event.id.to_string(),
            &format!("{} ({})", name, gender),
        );

        Ok(id)
    }
}
