//! Table panel: every record of the selected section, charted column
//! highlighted.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Width of the leading time column ("hh:mm:ss AM").
const TIME_WIDTH: u16 = 11;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(table) = &app.table.table else {
        f.render_widget(
            Paragraph::new(Span::styled("No section selected", theme::muted())),
            area,
        );
        return;
    };

    let highlight = app.table.highlight;
    let cell_style = |idx: usize| {
        if Some(idx) == highlight {
            theme::warning()
        } else {
            theme::text()
        }
    };

    let header = Row::new(table.columns.iter().enumerate().map(|(i, name)| {
        Cell::from(name.as_str()).style(cell_style(i).add_modifier(Modifier::BOLD))
    }));

    let body_height = area.height.saturating_sub(1) as usize;
    let rows = table
        .rows
        .iter()
        .skip(app.table.scroll)
        .take(body_height)
        .map(|row| {
            Row::new(
                row.iter()
                    .enumerate()
                    .map(|(i, value)| Cell::from(value.as_str()).style(cell_style(i))),
            )
        });

    let widths = column_widths(&table.columns);
    f.render_widget(Table::new(rows, widths).header(header), area);
}

fn column_widths(columns: &[String]) -> Vec<Constraint> {
    columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                Constraint::Length(TIME_WIDTH)
            } else {
                Constraint::Length((name.len() as u16).max(8))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_column_fits_timestamps() {
        let widths = column_widths(&["time".into(), "%usr".into(), "kbmemfree".into()]);
        assert_eq!(
            widths,
            vec![
                Constraint::Length(11),
                Constraint::Length(8),
                Constraint::Length(9),
            ]
        );
    }
}
