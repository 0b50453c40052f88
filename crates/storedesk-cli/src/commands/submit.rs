//! The `submit` command: fills in and submits the store form.
//!
//! The form is seeded from a store's current details, each `--set KEY=VALUE`
//! is applied as the matching control would apply it, and the form is
//! submitted. A valid submission prints the submitted values as JSON; an
//! invalid one fails with the per-field messages.

use std::io::Write;

use storedesk_admin::pages::store::apply_assignment;
use storedesk_core::{Settings, StoreDeskError, StoreDeskResult};
use storedesk_forms::SubmitOutcome;

use crate::command::ManagementCommand;
use crate::commands::load_dashboard;

/// `storedesk submit [--store ID] [--set KEY=VALUE ...]`
pub struct SubmitCommand;

/// Splits `KEY=VALUE`. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> StoreDeskResult<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(StoreDeskError::InvalidInput(format!(
            "expected KEY=VALUE, got `{raw}`"
        ))),
    }
}

impl ManagementCommand for SubmitCommand {
    fn name(&self) -> &'static str {
        "submit"
    }

    fn help(&self) -> &'static str {
        "Edit and submit the store form"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("store")
                .long("store")
                .value_name("ID")
                .value_parser(clap::value_parser!(u64))
                .help("Store to edit (defaults to the first store)"),
        )
        .arg(
            clap::Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .action(clap::ArgAction::Append)
                .help("Set a field; repeatable"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> StoreDeskResult<()> {
        let dashboard = load_dashboard(settings)?;
        let store_id = matches.get_one::<u64>("store").copied();
        let mut form = dashboard.store_page().form(store_id)?;

        for raw in matches.get_many::<String>("set").into_iter().flatten() {
            let (key, value) = parse_assignment(raw)?;
            apply_assignment(&mut form, key, value)?;
        }

        match form.submit() {
            SubmitOutcome::Submitted(bag) => {
                let json = serde_json::to_string_pretty(&bag)?;
                writeln!(out, "{json}")?;
                Ok(())
            }
            SubmitOutcome::Invalid(errors) => Err(StoreDeskError::Validation(errors.into())),
        }
    }
}
