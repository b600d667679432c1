//! Help overlay listing key bindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = super::centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let lines: Vec<Line> = key_bindings_help()
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<16}"), theme::accent()),
                Span::styled(*action, theme::text()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
