//! Section/column menu — the tree's rows, styled by marker, with a cursor.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::tree::INDENT;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let tree = &app.menu.tree;
    let rows = tree.rows();

    if rows.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No sections", theme::muted())),
            area,
        );
        return;
    }

    let height = area.height as usize;
    let offset = scroll_offset(app.menu.cursor, height);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, row)| {
            let name_style = if i == app.menu.cursor {
                theme::cursor()
            } else if row.marker.is_branch() {
                theme::text()
            } else {
                theme::muted()
            };
            Line::from(vec![
                Span::raw(INDENT.repeat(row.depth)),
                Span::styled(row.marker.as_str(), theme::marker(row.marker)),
                Span::styled(tree.name(row.node), name_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// First visible row so the cursor stays on screen.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        (cursor + 1).saturating_sub(height)
    }
}
