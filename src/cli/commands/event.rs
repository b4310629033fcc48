use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, EventAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event { action } = cmd {
        let store = open_store(cfg)?;

        match action {
            EventAction::Add {
                title,
                date,
                location,
                topic,
            } => {
                let event_date = date::parse_or_today(date.as_deref())?;
                AddLogic::add_event(&store, title, event_date, location, topic)?;
            }
            EventAction::List => {
                let events = store.get_events()?;
                if events.is_empty() {
                    info("No events recorded yet. Add one with `agrimpact event add`.");
                    return Ok(());
                }

                let mut table = Table::new(["ID", "DATE", "TITLE", "LOCATION", "TOPIC"]);
                for ev in &events {
                    table.add_row(vec![
                        ev.id.to_string(),
                        ev.event_date.to_string(),
                        ev.title.clone(),
                        ev.location.clone(),
                        ev.topic.clone(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
