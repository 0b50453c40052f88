//! # storedesk-cli
//!
//! Management commands for the storedesk dashboard, dispatched through a
//! [`CommandRegistry`](command::CommandRegistry) built on `clap`.
//!
//! - `pages` - list the dashboard routes
//! - `render <page> [--page N] [--tab NAME] [--id ID]` - print a page's HTML
//! - `submit [--store ID] [--set KEY=VALUE ...]` - edit and submit the store form
//! - `check` - validate settings and fixtures
//!
//! ```rust
//! use storedesk_cli::command::CommandRegistry;
//! use storedesk_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//! assert_eq!(registry.list_commands(), vec!["check", "pages", "render", "submit"]);
//! ```

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, ManagementCommand};
