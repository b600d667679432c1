//! User configuration — TOML file with layout and logging settings.
//!
//! Looked up at `<config dir>/sarview/config.toml` unless `--config` names
//! another file. A missing file means defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Narrowest menu the layout accepts.
pub const MIN_MENU_WIDTH: u16 = 12;
/// Shortest chart the layout accepts.
pub const MIN_CHART_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the section/column menu, in columns.
    pub menu_width: u16,
    /// Height of the chart panel, in rows.
    pub chart_height: u16,
    /// Default tracing level; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Directory for `sarview.log`. Defaults to the platform cache dir.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_width: 30,
            chart_height: 10,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Clamp layout values to something drawable.
    pub fn sanitized(mut self) -> Self {
        self.menu_width = self.menu_width.max(MIN_MENU_WIDTH);
        self.chart_height = self.chart_height.max(MIN_CHART_HEIGHT);
        self
    }

    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sarview")
        })
    }
}

/// Default config file location.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sarview")
        .join("config.toml")
}

/// Load the config at `path`. A missing file yields defaults.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("read config {}", path.display()));
        }
    };
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
    Ok(config.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/sarview/config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "menu_width = 40\nlog_level = \"debug\"\n").unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.menu_width, 40);
        assert_eq!(loaded.chart_height, 10);
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.log_dir, None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "menu_width = \"wide\"").unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn tiny_layout_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "menu_width = 2\nchart_height = 0\n").unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.menu_width, MIN_MENU_WIDTH);
        assert_eq!(loaded.chart_height, MIN_CHART_HEIGHT);
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config = Config {
            log_dir: Some(PathBuf::from("/tmp/sarview-logs")),
            ..Config::default()
        };
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/sarview-logs"));
    }

    #[test]
    fn roundtrip() {
        let config = Config {
            menu_width: 44,
            ..Config::default()
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
