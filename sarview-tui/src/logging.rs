//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Log file name inside the configured directory.
pub const LOG_FILE: &str = "sarview.log";

/// Filter directives for the configured level. `RUST_LOG` takes precedence.
pub fn default_filter(level: &str) -> String {
    format!("sarview={level},sarview_tui={level},sarview_core={level}")
}

/// Install the global subscriber writing to `<log dir>/sarview.log`.
///
/// The returned guard flushes the non-blocking writer on drop and must be
/// kept alive until the program exits.
pub fn init(config: &Config) -> anyhow::Result<(WorkerGuard, PathBuf)> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("install tracing subscriber")?;

    Ok((guard, dir.join(LOG_FILE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_every_crate() {
        let filter = default_filter("debug");
        assert!(filter.contains("sarview=debug"));
        assert!(filter.contains("sarview_tui=debug"));
        assert!(filter.contains("sarview_core=debug"));
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
