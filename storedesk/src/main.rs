//! The `storedesk` command-line entry point.
//!
//! ```bash
//! storedesk pages
//! storedesk render customers --page 2
//! storedesk submit --store 1 --set state=NY
//! storedesk --settings storedesk.toml check
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use storedesk::cli::command::CommandRegistry;
use storedesk::cli::commands::register_builtin_commands;
use storedesk::core::logging::setup_logging;
use storedesk::core::{settings_loader, StoreDeskError, SETTINGS};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<StoreDeskError>()
                .map_or(1, StoreDeskError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    let matches = registry.build_cli().get_matches();

    let settings = match matches.get_one::<String>("settings") {
        Some(path) => settings_loader::from_file_with_env(path)
            .with_context(|| format!("loading settings from {path}"))?,
        None => settings_loader::from_env(),
    };
    setup_logging(&settings);
    tracing::debug!(locale = %settings.locale, per_page = settings.list_per_page, "settings loaded");
    SETTINGS.configure(settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    registry.execute(&matches, SETTINGS.get(), &mut out)?;
    out.flush()?;
    Ok(())
}
