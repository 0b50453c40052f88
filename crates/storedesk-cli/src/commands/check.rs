//! The `check` command: validates settings and fixtures.

use std::fmt;
use std::io::Write;

use storedesk_admin::MockData;
use storedesk_core::{Settings, StoreDeskError, StoreDeskResult};

use crate::command::ManagementCommand;

/// `storedesk check`
pub struct CheckCommand;

/// The result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMessage {
    pub level: CheckLevel,
    pub msg: String,
    pub hint: Option<String>,
    /// Stable identifier, e.g. "settings.E001".
    pub id: &'static str,
}

/// Severity of a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckLevel {
    /// Worth a look; does not fail the check.
    Warning,
    /// Fails the check.
    Error,
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.id, self.level, self.msg)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        Ok(())
    }
}

/// Runs every check against `settings` and the embedded fixtures.
pub fn run_checks(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    if settings.list_per_page == 0 {
        messages.push(CheckMessage {
            level: CheckLevel::Error,
            msg: "list_per_page is 0".to_string(),
            hint: Some("Set list_per_page to a positive number of rows".to_string()),
            id: "settings.E001",
        });
    }

    if settings.confirm_button_label.trim().is_empty() {
        messages.push(CheckMessage {
            level: CheckLevel::Warning,
            msg: "confirm_button_label is blank".to_string(),
            hint: Some("Forms will render a submit button with no text".to_string()),
            id: "settings.W001",
        });
    }

    if !settings.locale.eq_ignore_ascii_case("en-us") {
        messages.push(CheckMessage {
            level: CheckLevel::Warning,
            msg: format!("locale `{}` has no translated labels", settings.locale),
            hint: Some("Labels are rendered in en-us".to_string()),
            id: "settings.W002",
        });
    }

    match MockData::load() {
        Ok(data) => {
            if data.stores.is_empty() {
                messages.push(CheckMessage {
                    level: CheckLevel::Error,
                    msg: "no stores in fixtures".to_string(),
                    hint: Some("The store page needs at least one store".to_string()),
                    id: "fixtures.E002",
                });
            }
        }
        Err(err) => messages.push(CheckMessage {
            level: CheckLevel::Error,
            msg: err.to_string(),
            hint: None,
            id: "fixtures.E001",
        }),
    }

    messages
}

impl ManagementCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Check settings and fixture data"
    }

    fn handle(
        &self,
        _matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> StoreDeskResult<()> {
        let messages = run_checks(settings);
        for message in &messages {
            writeln!(out, "{message}")?;
        }
        let errors = messages
            .iter()
            .filter(|m| m.level == CheckLevel::Error)
            .count();
        match messages.len() {
            0 => writeln!(out, "System check identified no issues.")?,
            n => writeln!(out, "System check identified {n} issue(s).")?,
        }
        if errors > 0 {
            return Err(StoreDeskError::ConfigurationError(format!(
                "{errors} check(s) failed"
            )));
        }
        Ok(())
    }
}
