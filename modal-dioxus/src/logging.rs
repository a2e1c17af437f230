//! Logging setup for the `mdx` binary.
//!
//! Installs a subscriber with `RUST_LOG`-based filtering (falling back to the
//! configured level) and a formatter that drops noisy webview events.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Event formatter that drops lines containing any suppressed pattern.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false),
            suppressed,
        }
    }

    fn is_suppressed(&self, line: &str) -> bool {
        self.suppressed.iter().any(|pattern| line.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;

        if self.is_suppressed(&line) {
            Ok(())
        } else {
            write!(writer, "{line}")
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Logs go to `config.log_file` when it can be created, stderr otherwise.
/// `log` records from the library are forwarded by tracing-subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let formatter = FilteringFormatter::new(config.suppressed_patterns.clone());

    let log_file = config.log_file.as_ref().and_then(|path| File::create(path).ok());

    if let Some(log_file) = log_file {
        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .event_format(formatter);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(io::stderr)
            .event_format(formatter);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
