//! Top-level UI layout — menu on the left, chart over table on the right,
//! status bar along the bottom.

pub mod chart_panel;
pub mod help_overlay;
pub mod menu_panel;
pub mod status_bar;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Focus, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        f.area(),
    );

    // Split: main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());
    let main_area = rows[0];
    let status_area = rows[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.config.menu_width),
            Constraint::Min(10),
        ])
        .split(main_area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.config.chart_height),
            Constraint::Min(3),
        ])
        .split(columns[1]);

    let menu_inner = panel(f, columns[0], "Sections", app.focus == Focus::Menu);
    menu_panel::render(f, menu_inner, app);

    let chart_title = app
        .chart
        .series
        .as_ref()
        .map(|s| s.title())
        .unwrap_or_else(|| "Chart".to_string());
    let chart_inner = panel(f, right[0], &chart_title, false);
    chart_panel::render(f, chart_inner, app);

    let table_inner = panel(f, right[1], "Samples", app.focus == Focus::Table);
    table_panel::render(f, table_inner, app);

    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        help_overlay::render(f, main_area);
    }
}

/// Draw a bordered panel and return its inner area.
fn panel(f: &mut Frame, area: Rect, title: &str, active: bool) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(active));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
