use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::report::Report;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `report` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    let records = store.get_attendance_data()?;
    if records.is_empty() {
        info("No attendance data available.");
        return Ok(());
    }

    let report = Report::build(store.count_events()?, &records);

    header("Attendance & Impact Report");
    println!("{}", report.to_markdown());
    Ok(())
}
