//! The `pages` command: lists the dashboard routes.

use std::io::Write;

use storedesk_core::{Settings, StoreDeskResult};

use crate::command::ManagementCommand;
use crate::commands::load_dashboard;

/// `storedesk pages`
pub struct PagesCommand;

impl ManagementCommand for PagesCommand {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn help(&self) -> &'static str {
        "List dashboard pages"
    }

    fn handle(
        &self,
        _matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> StoreDeskResult<()> {
        let dashboard = load_dashboard(settings)?;
        for route in dashboard.routes() {
            let title = dashboard.page(route)?.title();
            writeln!(out, "{route:<12}{title}")?;
        }
        Ok(())
    }
}
