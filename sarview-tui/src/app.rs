//! Application state — single-owner, main-thread only.
//!
//! The report is loaded once and owned here for the whole session. The menu
//! tree is built from it once and keeps its expand state until quit.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use sarview_core::{Report, SectionTable, Series};

use crate::config::Config;
use crate::menu::{self, Selection};
use crate::tree::{Tree, TreeEvent};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Menu => Focus::Table,
            Focus::Table => Focus::Menu,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Menu panel: the tree and the cursor line.
#[derive(Debug, Clone)]
pub struct MenuPanelState {
    pub tree: Tree,
    pub cursor: usize,
}

impl MenuPanelState {
    pub fn new(tree: Tree) -> Self {
        Self { tree, cursor: 0 }
    }

    pub fn row_count(&self) -> usize {
        self.tree.rows().len()
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_bottom(&mut self) {
        self.cursor = self.row_count().saturating_sub(1);
    }

    /// Keep the cursor on a rendered line after the tree shrinks.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.row_count().saturating_sub(1));
    }
}

/// Chart panel state.
#[derive(Debug, Clone, Default)]
pub struct ChartPanelState {
    pub series: Option<Series>,
}

/// Table panel state.
#[derive(Debug, Clone, Default)]
pub struct TablePanelState {
    pub table: Option<SectionTable>,
    /// Index into `table.columns` of the charted column.
    pub highlight: Option<usize>,
    /// First visible row.
    pub scroll: usize,
}

impl TablePanelState {
    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.row_count().saturating_sub(1);
        let next = self.scroll as isize + delta;
        self.scroll = next.clamp(0, max as isize) as usize;
    }

    pub fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.scroll = self.row_count().saturating_sub(1);
    }
}

/// Top-level application state.
pub struct AppState {
    pub source: PathBuf,
    pub report: Report,
    pub config: Config,

    // Panel states
    pub menu: MenuPanelState,
    pub chart: ChartPanelState,
    pub table: TablePanelState,

    // Navigation
    pub focus: Focus,
    pub overlay: Overlay,
    pub running: bool,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(source: PathBuf, report: Report, config: Config) -> Self {
        let menu = MenuPanelState::new(menu::build_menu(&report));
        let mut app = Self {
            source,
            report,
            config,
            menu,
            chart: ChartPanelState::default(),
            table: TablePanelState::default(),
            focus: Focus::Menu,
            overlay: Overlay::None,
            running: true,
            status_message: None,
        };

        if app.report.is_empty() {
            app.set_warning(format!("No sections found in {}", app.source.display()));
        } else {
            app.set_status(format!(
                "Loaded {}: {} sections, {} records",
                app.source.display(),
                app.report.len(),
                app.report.record_count()
            ));
        }
        app
    }

    /// Activate the menu line under the cursor.
    ///
    /// Branches toggle in place. Leaves are resolved against the report;
    /// a failure only produces an error status.
    pub fn activate_menu(&mut self) {
        match self.menu.tree.activate(self.menu.cursor) {
            Some(TreeEvent::Toggled { path, expanded }) => {
                debug!(?path, expanded, "menu toggled");
                self.menu.clamp_cursor();
            }
            Some(TreeEvent::Activated { path }) => match menu::select(&self.report, &path) {
                Ok(selection) => self.apply_selection(selection),
                Err(e) => {
                    warn!(?path, error = %e, "menu selection failed");
                    self.set_error(e.to_string());
                }
            },
            None => {}
        }
    }

    /// Hand a resolved selection to the chart and table panels.
    pub fn apply_selection(&mut self, selection: Selection) {
        info!(
            section = %selection.section,
            column = %selection.column,
            points = selection.series.len(),
            "series selected"
        );
        self.set_status(format!(
            "{}: {} samples",
            selection.series.title(),
            selection.series.len()
        ));
        self.table.highlight = selection.table.column_index(&selection.column);
        self.table.table = Some(selection.table);
        self.table.scroll = 0;
        self.chart.series = Some(selection.series);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_app, SAMPLE_REPORT};
    use sarview_core::parse_str;

    #[test]
    fn focus_cycles() {
        assert_eq!(Focus::Menu.next(), Focus::Table);
        assert_eq!(Focus::Table.next(), Focus::Menu);
    }

    #[test]
    fn new_app_reports_load_summary() {
        let app = sample_app();
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Info);
        assert!(msg.contains("2 sections"));
        assert!(msg.contains("3 records"));
    }

    #[test]
    fn empty_report_warns() {
        let app = AppState::new(
            PathBuf::from("empty.sar"),
            parse_str("").unwrap(),
            Config::default(),
        );
        assert_eq!(app.status_message.unwrap().1, StatusLevel::Warning);
        assert_eq!(app.menu.row_count(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = sample_app();
        assert_eq!(app.menu.row_count(), 2);
        app.menu.move_up();
        assert_eq!(app.menu.cursor, 0);
        app.menu.move_down();
        app.menu.move_down();
        assert_eq!(app.menu.cursor, 1);
        app.menu.move_top();
        assert_eq!(app.menu.cursor, 0);
        app.menu.move_bottom();
        assert_eq!(app.menu.cursor, 1);
    }

    #[test]
    fn activating_leaf_fills_chart_and_table() {
        let mut app = sample_app();
        app.activate_menu(); // expand "CPU util"
        app.menu.cursor = 2; // "%usr"
        app.activate_menu();

        let series = app.chart.series.as_ref().unwrap();
        assert_eq!(series.column, "%usr");
        assert_eq!(series.values(), vec![1.0, 2.0]);
        assert_eq!(app.table.highlight, Some(2));
        assert_eq!(app.table.row_count(), 2);
    }

    #[test]
    fn failed_selection_keeps_previous_state() {
        let mut app = sample_app();
        app.activate_menu();
        app.menu.cursor = 2;
        app.activate_menu();
        let before = app.chart.series.clone();
        let menu_before = app.menu.tree.render();

        app.menu.cursor = 1; // "CPU" column holds "all"
        app.activate_menu();

        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Error);
        assert_eq!(app.chart.series, before);
        assert_eq!(app.menu.tree.render(), menu_before);
    }

    #[test]
    fn collapsing_clamps_cursor() {
        let mut app = sample_app();
        app.menu.cursor = 1;
        app.activate_menu(); // expand last section
        app.menu.move_bottom();
        let bottom = app.menu.cursor;
        assert!(bottom > 1);

        // Collapse it again from its own line.
        app.menu.cursor = 1;
        app.activate_menu();
        assert_eq!(app.menu.row_count(), 2);
        assert!(app.menu.cursor <= 1);
    }

    #[test]
    fn table_scroll_is_clamped() {
        let mut app = sample_app();
        app.activate_menu();
        app.menu.cursor = 2;
        app.activate_menu();

        app.table.scroll_by(10);
        assert_eq!(app.table.scroll, 1);
        app.table.scroll_by(-10);
        assert_eq!(app.table.scroll, 0);
        app.table.scroll_bottom();
        assert_eq!(app.table.scroll, 1);
        app.table.scroll_top();
        assert_eq!(app.table.scroll, 0);
    }

    #[test]
    fn help_toggles() {
        let mut app = sample_app();
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::Help);
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn sample_report_parses() {
        assert!(parse_str(SAMPLE_REPORT).is_ok());
    }
}
