use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{SchemaState, Store};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file and its parent directory
///  - the events, attendees and log tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let store = Store::new(cfg.database_path());

    println!("⚙️  Initializing agrimpact…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", store.path().display());

    let state = store.initialize()?;
    if state == SchemaState::LegacyRenameFailed {
        warning("Database opened with a legacy events schema; reports may fail until it is fixed.");
    }

    if let Err(e) = store.log(
        "init",
        "",
        &format!("Database initialized at {}", store.path().display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", store.path().display()));
    Ok(())
}
