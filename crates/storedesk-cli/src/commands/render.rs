//! The `render` command: prints one page's HTML.

use std::io::Write;

use storedesk_admin::PageRequest;
use storedesk_core::{Settings, StoreDeskError, StoreDeskResult};

use crate::command::ManagementCommand;
use crate::commands::load_dashboard;

/// `storedesk render <page> [--page N] [--tab NAME] [--id ID]`
pub struct RenderCommand;

/// Reads the page request options from parsed arguments.
pub fn page_request(matches: &clap::ArgMatches) -> PageRequest {
    PageRequest {
        page: matches.get_one::<usize>("page").copied().unwrap_or(1),
        tab: matches.get_one::<String>("tab").cloned(),
        record: matches.get_one::<u64>("id").copied(),
    }
}

impl ManagementCommand for RenderCommand {
    fn name(&self) -> &'static str {
        "render"
    }

    fn help(&self) -> &'static str {
        "Render a dashboard page as HTML"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("route")
                .value_name("PAGE")
                .required(true)
                .help("Page to render (see `storedesk pages`)"),
        )
        .arg(
            clap::Arg::new("page")
                .long("page")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .help("Page number for paginated tables"),
        )
        .arg(
            clap::Arg::new("tab")
                .long("tab")
                .value_name("NAME")
                .help("Tab to open on tabbed pages"),
        )
        .arg(
            clap::Arg::new("id")
                .long("id")
                .value_name("ID")
                .value_parser(clap::value_parser!(u64))
                .help("Record to focus: an order's items, or the store to edit"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> StoreDeskResult<()> {
        let route = matches
            .get_one::<String>("route")
            .ok_or_else(|| StoreDeskError::InvalidInput("missing page name".to_string()))?;
        let dashboard = load_dashboard(settings)?;
        let html = dashboard.render(route, &page_request(matches))?;
        writeln!(out, "{html}")?;
        Ok(())
    }
}
