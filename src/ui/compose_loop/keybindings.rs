//! Key dispatch for the compose screen.
//!
//! [`handle_key`] is pure with respect to the terminal: it mutates the
//! [`App`] and tells the loop what to do next. Anything that needs the
//! terminal itself, such as handing it to `$EDITOR`, is returned as an action.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::core::app::{App, EditTarget, Focus};
use crate::utils::clipboard::ClipboardSink;
use crate::utils::line_editor::map_key_event_to_action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLoopAction {
    Continue,
    Break,
    LaunchExternalEditor,
}

pub fn handle_key(
    app: &mut App,
    key: KeyEvent,
    clipboard: &mut dyn ClipboardSink,
) -> KeyLoopAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return KeyLoopAction::Break;
    }

    if app.ui.dialog.is_some() {
        return handle_dialog_key(app, key, ctrl);
    }

    if ctrl {
        match key.code {
            KeyCode::Char('y') => {
                app.copy_output(clipboard);
                return KeyLoopAction::Continue;
            }
            KeyCode::Char('r') => {
                app.reset_output();
                return KeyLoopAction::Continue;
            }
            KeyCode::Char('t') => {
                app.open_editor(EditTarget::Template);
                return KeyLoopAction::Continue;
            }
            KeyCode::Char('o') => {
                app.open_editor(EditTarget::Output);
                return KeyLoopAction::Continue;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return KeyLoopAction::Continue;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return KeyLoopAction::Continue;
        }
        _ => {}
    }

    match app.ui.focus {
        Focus::Link => {
            if key.code == KeyCode::Enter {
                app.focus_next();
            } else if let Some(action) = map_key_event_to_action(&key) {
                app.edit_link(action);
            }
        }
        Focus::Template => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('e')) {
                app.open_editor(EditTarget::Template);
            }
        }
        Focus::Output => match key.code {
            KeyCode::Enter | KeyCode::Char('e') => app.open_editor(EditTarget::Output),
            KeyCode::Char('y') => {
                app.copy_output(clipboard);
            }
            KeyCode::Char('r') => app.reset_output(),
            _ => {}
        },
    }
    KeyLoopAction::Continue
}

fn handle_dialog_key(app: &mut App, key: KeyEvent, ctrl: bool) -> KeyLoopAction {
    match key.code {
        KeyCode::Esc => {
            debug!("editor dialog cancelled");
            app.cancel_editor();
        }
        KeyCode::Char('s') if ctrl => app.save_editor(),
        KeyCode::Char('e') if ctrl => return KeyLoopAction::LaunchExternalEditor,
        _ => {
            if let Some(dialog) = app.ui.dialog.as_mut() {
                dialog.textarea.input(key);
            }
        }
    }
    KeyLoopAction::Continue
}
