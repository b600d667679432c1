//! sarview TUI — interactive browser for `sar -A` text reports.
//!
//! Panels:
//! 1. Menu — sections as collapsible branches, columns as leaves
//! 2. Chart — the activated column over time
//! 3. Table — every record of the activated section

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod menu;
pub mod theme;
pub mod tree;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use tree::{Tree, TreeEvent};

#[cfg(test)]
mod test_helpers;
