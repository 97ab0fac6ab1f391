use crate::catalog::{Decision, PageKind};
use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Tear down the current page session and start the given page.
    SwitchPage(PageKind),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match app.focus() {
        Focus::Confirm => handle_confirm_key(app, key),
        Focus::Editor => handle_editor_key(app, key),
        Focus::Page => return handle_page_key(app, key),
    }
    InputAction::None
}

/// The confirmation swallows every key it does not answer.
fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.answer_confirm(Decision::Accept)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.answer_confirm(Decision::Decline)
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => EditorIntent::Close,
        KeyCode::Enter => {
            app.submit_editor();
            return;
        }
        KeyCode::Tab | KeyCode::Down => EditorIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => EditorIntent::FocusPrev,
        KeyCode::Left => EditorIntent::Decrease,
        KeyCode::Right => EditorIntent::Increase,
        KeyCode::Backspace => EditorIntent::Backspace,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            EditorIntent::Input(ch)
        }
        _ => return,
    };
    app.dispatch_editor(intent);
}

fn handle_page_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Tab => return InputAction::SwitchPage(app.page().toggle()),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => match app.page() {
            PageKind::Home => match key.code {
                KeyCode::Left => app.carousel_prev(Instant::now()),
                KeyCode::Right => app.carousel_next(Instant::now()),
                _ => {}
            },
            PageKind::Dashboard => match key.code {
                KeyCode::Char('a') => app.open_add(),
                KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
                KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
                _ => {}
            },
        },
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
