//! Chart panel: line chart of the selected column over time.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use sarview_core::Series;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.chart.series {
        Some(series) if !series.is_empty() => render_chart(f, area, series),
        _ => render_empty(f, area),
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Expand a section and press Enter on a column to chart it.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Y axis bounds with 5% headroom; flat series get a unit band.
pub fn y_bounds(min: f64, max: f64) -> [f64; 2] {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return [min - 1.0, max + 1.0];
    }
    let padding = span * 0.05;
    [min - padding, max + padding]
}

fn render_chart(f: &mut Frame, area: Rect, series: &Series) {
    let Some((min_y, max_y)) = series.bounds() else {
        render_empty(f, area);
        return;
    };
    let [y_min, y_max] = y_bounds(min_y, max_y);
    let x_max = series.len().saturating_sub(1) as f64;

    let data: Vec<(f64, f64)> = series
        .values()
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v))
        .collect();

    let dataset = Dataset::default()
        .name(series.column.as_str())
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let labels = series.labels();
    let first = labels.first().copied().unwrap_or_default();
    let last = labels.last().copied().unwrap_or_default();

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first.to_string(), theme::muted()),
                    Span::styled(last.to_string(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_padded() {
        let [lo, hi] = y_bounds(0.0, 100.0);
        assert!((lo + 5.0).abs() < 1e-9);
        assert!((hi - 105.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_gets_a_band() {
        assert_eq!(y_bounds(3.0, 3.0), [2.0, 4.0]);
    }
}
