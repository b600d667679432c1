//! Keyboard input dispatch — overlays → global keys → focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Focus, Overlay};

/// Rows moved by PageUp/PageDown in the table.
pub const PAGE_ROWS: isize = 10;

/// Handle a key event, mutating the app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                app.overlay = Overlay::None;
            }
            _ => {}
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::Esc => {
            app.status_message = None;
            return;
        }
        _ => {}
    }

    // 3. Focused panel.
    match app.focus {
        Focus::Menu => handle_menu_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_menu_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.menu.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.menu.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.menu.move_top(),
        KeyCode::Char('G') | KeyCode::End => app.menu.move_bottom(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_menu(),
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.table.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.table.scroll_by(-1),
        KeyCode::PageDown => app.table.scroll_by(PAGE_ROWS),
        KeyCode::PageUp => app.table.scroll_by(-PAGE_ROWS),
        KeyCode::Char('g') | KeyCode::Home => app.table.scroll_top(),
        KeyCode::Char('G') | KeyCode::End => app.table.scroll_bottom(),
        _ => {}
    }
}

/// Key bindings shown in the help overlay, as (keys, action).
pub fn key_bindings_help() -> &'static [(&'static str, &'static str)] {
    &[
        ("j / Down", "Move down"),
        ("k / Up", "Move up"),
        ("g / G", "Jump to top / bottom"),
        ("Enter / Space", "Expand, collapse or chart column"),
        ("Tab", "Switch focus menu / table"),
        ("PgUp / PgDn", "Scroll table by page"),
        ("Esc", "Clear status message"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ]
}
