//! Logging integration for storedesk.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-page spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "storedesk_forms=debug"). In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used. Output goes to stderr so
/// rendered HTML on stdout stays clean.
///
/// Installing a subscriber twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for rendering one dashboard page.
///
/// # Examples
///
/// ```
/// use storedesk_core::logging::page_span;
///
/// let span = page_span("customers");
/// let _guard = span.enter();
/// tracing::info!("rendering");
/// ```
pub fn page_span(page: &str) -> tracing::Span {
    tracing::info_span!("page", name = page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        let settings = Settings {
            debug: false,
            log_level: "not a valid [filter".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
        setup_logging(&settings);
    }

    #[test]
    fn test_page_span_enter() {
        let span = page_span("orders");
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}
