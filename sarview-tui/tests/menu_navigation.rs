//! Menu navigation against the shared sample report.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};

use sarview_core::{parse_file, SectionId};
use sarview_tui::app::{AppState, StatusLevel};
use sarview_tui::config::Config;
use sarview_tui::handle_key;
use sarview_tui::menu::{build_menu, select};
use sarview_tui::TreeEvent;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../sarview-core/tests/fixtures/sa_sample.txt")
}

fn app() -> AppState {
    let path = fixture();
    let report = parse_file(&path).unwrap();
    AppState::new(path, report, Config::default())
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

fn path(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn collapsed_menu_lists_every_section() {
    let report = parse_file(fixture()).unwrap();
    let tree = build_menu(&report);
    assert_eq!(
        tree.lines(),
        vec![
            "  + CPU util",
            "  + Task Creation & Switch",
            "  + Memory util",
            "  + Queue-length & load-avg",
            "  + Network statistics",
        ]
    );
}

#[test]
fn expanding_cpu_shows_header_columns() {
    let report = parse_file(fixture()).unwrap();
    let mut tree = build_menu(&report);

    let event = tree.activate(0).unwrap();
    assert_eq!(
        event,
        TreeEvent::Toggled {
            path: path(&["CPU util", "root"]),
            expanded: true,
        }
    );
    let lines = tree.lines();
    assert_eq!(lines.len(), 5 + 7);
    assert_eq!(lines[1], "    . CPU");
    assert_eq!(lines[2], "    . %usr");
    assert_eq!(lines[7], "    . %idle");
    assert_eq!(lines[8], "  + Task Creation & Switch");
}

#[test]
fn activating_usr_yields_merged_series() {
    let report = parse_file(fixture()).unwrap();
    let mut tree = build_menu(&report);
    tree.activate(0);

    let Some(TreeEvent::Activated { path: leaf }) = tree.activate(2) else {
        panic!("expected a leaf activation");
    };
    assert_eq!(leaf, path(&["%usr", "CPU util", "root"]));

    let selection = select(&report, &leaf).unwrap();
    assert_eq!(selection.section, SectionId::CpuUtil);
    assert_eq!(
        selection.series.values(),
        vec![1.00, 1.50, 0.50, 3.25, 4.00, 2.50, 2.00, 2.50, 1.50]
    );
    assert_eq!(selection.table.rows.len(), 9);
}

#[test]
fn keyboard_session_charts_memory_column() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // expand "Memory util"
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // kbmemfree

    let series = app.chart.series.as_ref().unwrap();
    assert_eq!(series.title(), "Memory util / kbmemfree");
    assert_eq!(series.values(), vec![1843216.0, 1842960.0]);
    assert_eq!(app.table.highlight, Some(1));
}

#[test]
fn non_numeric_column_reports_error_and_keeps_menu() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    let before = app.menu.tree.render();
    press(&mut app, KeyCode::Enter); // "CPU" holds "all"

    let (msg, level) = app.status_message.clone().unwrap();
    assert_eq!(level, StatusLevel::Error);
    assert!(msg.contains("CPU"), "{msg}");
    assert!(app.chart.series.is_none());
    assert_eq!(app.menu.tree.render(), before);
}

#[test]
fn expand_state_survives_other_toggles() {
    let mut app = app();
    press(&mut app, KeyCode::Enter); // expand CPU util
    press(&mut app, KeyCode::Char('G'));
    press(&mut app, KeyCode::Enter); // expand Network statistics
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Enter); // collapse CPU util

    assert_eq!(
        &app.menu.tree.lines()[..5],
        &[
            "  + CPU util",
            "  + Task Creation & Switch",
            "  + Memory util",
            "  + Queue-length & load-avg",
            "  - Network statistics",
        ]
    );
    assert_eq!(app.menu.row_count(), 5 + 9);
}
