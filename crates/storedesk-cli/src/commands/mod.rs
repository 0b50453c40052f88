//! Built-in management commands.

pub mod check;
pub mod pages;
pub mod render;
pub mod submit;

pub use check::CheckCommand;
pub use pages::PagesCommand;
pub use render::RenderCommand;
pub use submit::SubmitCommand;

use storedesk_admin::{Dashboard, MockData};
use storedesk_core::{Settings, StoreDeskResult};

use crate::command::CommandRegistry;

/// Registers all built-in commands into `registry`.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(PagesCommand));
    registry.register(Box::new(RenderCommand));
    registry.register(Box::new(SubmitCommand));
    registry.register(Box::new(CheckCommand));
}

/// Loads the fixtures and builds the dashboard.
pub(crate) fn load_dashboard(settings: &Settings) -> StoreDeskResult<Dashboard> {
    let data = MockData::load()?;
    Ok(Dashboard::new(&data, settings))
}
