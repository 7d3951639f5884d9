//! File-based logging for the preview
//!
//! The terminal belongs to the mockup (or to the JSON stream in headless
//! mode), so tracing output goes to a rolling file instead of stdout.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "soundwave-preview";
const DEFAULT_FILTER: &str = "soundwave_preview=debug,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/soundwave-preview.YYYY-MM-DD` with daily
/// rotation. `RUST_LOG` overrides the default filter, which keeps this
/// crate at DEBUG and everything else at WARN.
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The writer flushes on drop, and logging lives as long as the process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(dir = LOG_DIR, "Logging initialized");
    Ok(())
}
