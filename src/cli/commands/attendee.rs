use crate::cli::commands::open_store;
use crate::cli::parser::{AttendeeAction, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendee { action } = cmd {
        let store = open_store(cfg)?;

        match action {
            AttendeeAction::Add {
                event,
                name,
                gender,
                province,
            } => {
                AddLogic::register_attendee(&store, cfg, *event, name, gender, province)?;
            }
            AttendeeAction::List { event } => {
                let attendees = store.get_attendees(*event)?;
                if attendees.is_empty() {
                    info("No attendees registered.");
                    return Ok(());
                }

                let mut table = Table::new(["ID", "EVENT", "NAME", "GENDER", "PROVINCE"]);
                for a in &attendees {
                    table.add_row(vec![
                        a.id.to_string(),
                        a.event_id.to_string(),
                        a.name.clone(),
                        a.gender.clone(),
                        a.province.clone(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
