//! Management command framework.
//!
//! A [`ManagementCommand`] declares its name, help text, and arguments, and
//! handles a parsed invocation. [`CommandRegistry`] collects commands, builds
//! the `clap` command tree, and dispatches to the chosen subcommand.
//!
//! Handlers write to the `out` writer they are given rather than to stdout
//! directly, so their output can be captured.
//!
//! ```rust
//! use std::io::Write;
//!
//! use storedesk_cli::command::{CommandRegistry, ManagementCommand};
//! use storedesk_core::{Settings, StoreDeskResult};
//!
//! struct Greet;
//!
//! impl ManagementCommand for Greet {
//!     fn name(&self) -> &'static str { "greet" }
//!     fn help(&self) -> &'static str { "Say hello" }
//!
//!     fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         _settings: &Settings,
//!         out: &mut dyn Write,
//!     ) -> StoreDeskResult<()> {
//!         writeln!(out, "hello")?;
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(Box::new(Greet));
//! let matches = registry.build_cli().try_get_matches_from(["storedesk", "greet"]).unwrap();
//! let mut out = Vec::new();
//! registry.execute(&matches, &Settings::default(), &mut out).unwrap();
//! assert_eq!(out, b"hello\n");
//! ```

use std::collections::HashMap;
use std::io::Write;

use storedesk_core::{Settings, StoreDeskError, StoreDeskResult};

/// A command invocable as `storedesk <name>`.
pub trait ManagementCommand {
    /// The subcommand name.
    fn name(&self) -> &'static str;

    /// One-line help text.
    fn help(&self) -> &'static str;

    /// Adds arguments to the subcommand. The default adds none.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Runs the command.
    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> StoreDeskResult<()>;
}

/// Registered commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing one with the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns the command named `name`.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns the registered names, sorted.
    pub fn list_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level `clap` command with one subcommand per entry.
    ///
    /// A global `--settings <FILE>` option is available to every subcommand.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("storedesk")
            .about("storedesk store management dashboard")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                clap::Arg::new("settings")
                    .long("settings")
                    .value_name("FILE")
                    .global(true)
                    .help("Settings file (.toml or .json)"),
            );

        for name in self.list_commands() {
            if let Some(cmd) = self.get(name) {
                let sub = clap::Command::new(name).about(cmd.help());
                app = app.subcommand(cmd.add_arguments(sub));
            }
        }
        app
    }

    /// Dispatches to the subcommand selected in `matches`.
    pub fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> StoreDeskResult<()> {
        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| StoreDeskError::InvalidInput("no subcommand specified".to_string()))?;
        let cmd = self
            .get(name)
            .ok_or_else(|| StoreDeskError::InvalidInput(format!("unknown command: {name}")))?;
        tracing::debug!(command = name, "running command");
        cmd.handle(sub_matches, settings, out)
    }
}
