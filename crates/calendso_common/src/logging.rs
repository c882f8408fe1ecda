//! Logging setup shared by the Calendso binaries.
//!
//! Console output always goes through a formatted `tracing-subscriber` layer.
//! When a log directory is configured, a second layer writes the same events to a
//! daily rolling file through a non-blocking `tracing-appender` writer.

use std::str::FromStr;

use calendso_config::AppConfig;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "calendso.log";

/// Initialize the tracing subscriber from the `logging` section of the config.
///
/// An unknown level string falls back to INFO.
pub fn init_from_config(config: &AppConfig) -> Option<WorkerGuard> {
    let logging = config.logging.clone().unwrap_or_default();
    let level = parse_level(logging.level.as_deref());
    init_with_level(level, logging.directory.as_deref())
}

/// Parses a level name, defaulting to INFO.
pub fn parse_level(level: Option<&str>) -> Level {
    level
        .and_then(|l| Level::from_str(l).ok())
        .unwrap_or(Level::INFO)
}

/// Initialize the tracing subscriber with a specific log level.
///
/// The returned guard flushes the file writer on drop and has to be held for
/// the lifetime of the process. Calling this twice is harmless; the second
/// call leaves the existing subscriber in place.
pub fn init_with_level(level: Level, directory: Option<&str>) -> Option<WorkerGuard> {
    let mut filter = EnvFilter::from_default_env();
    for target in ["calendso", "tower_http"] {
        match format!("{}={}", target, level).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => error!("Invalid log directive for {}: {}", target, e),
        }
    }

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(file_layer)
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
        if let Some(dir) = directory {
            info!("Writing log files to {}", dir);
        }
    }

    guard
}
