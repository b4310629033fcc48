use crate::config::Config;
use crate::db::{SchemaState, Store};
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub mod attendee;
pub mod config;
pub mod event;
pub mod export;
pub mod init;
pub mod log;
pub mod report;

/// Store for the configured database, with the schema ensured.
///
/// Every store-backed command goes through here, so a fresh path gets its
/// tables and a legacy `events.date` column is renamed on first use.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    let store = Store::new(cfg.database_path());
    if store.initialize()? == SchemaState::LegacyRenameFailed {
        warning("Database uses a legacy events schema; reports may fail until it is fixed.");
    }
    Ok(store)
}
