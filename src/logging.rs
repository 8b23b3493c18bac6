//! File-based logging.
//!
//! The TUI owns the terminal, so everything goes to a daily rolling file
//! instead of stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "playbar";
const DEFAULT_FILTER: &str = "playbar=debug,warn";

/// Install the global subscriber writing to `dir/playbar.YYYY-MM-DD`.
///
/// The level comes from `RUST_LOG` when set. Keep the returned guard alive
/// until shutdown or buffered lines are lost.
pub fn init_logging(dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}
