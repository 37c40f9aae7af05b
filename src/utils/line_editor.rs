//! Single-line editing for the meeting-link field.
//!
//! Editing is kept separate from the composer: the caller applies an action,
//! and only when the outcome reports a text change does it forward the new
//! text to [`crate::core::composer::TemplateComposer::set_link_value`].

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditorState {
    pub text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl LineEditorState {
    pub fn with_text(text: String) -> Self {
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        let prefix: String = self.text.chars().take(self.cursor).collect();
        UnicodeWidthStr::width(prefix.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEditAction {
    Insert(char),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveStart,
    MoveEnd,
    DeleteToEnd,
    DeleteWord,
    ClearAll,
    Paste(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEditOutcome {
    TextChanged,
    CursorMoved,
    Unchanged,
}

pub fn map_key_event_to_action(key: &KeyEvent) -> Option<LineEditAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Backspace => Some(LineEditAction::Backspace),
        KeyCode::Delete => Some(LineEditAction::Delete),
        KeyCode::Left => Some(LineEditAction::MoveLeft),
        KeyCode::Right => Some(LineEditAction::MoveRight),
        KeyCode::Home => Some(LineEditAction::MoveStart),
        KeyCode::End => Some(LineEditAction::MoveEnd),
        KeyCode::Char('a') if ctrl => Some(LineEditAction::MoveStart),
        KeyCode::Char('e') if ctrl => Some(LineEditAction::MoveEnd),
        KeyCode::Char('k') if ctrl => Some(LineEditAction::DeleteToEnd),
        KeyCode::Char('w') if ctrl => Some(LineEditAction::DeleteWord),
        KeyCode::Char('u') if ctrl => Some(LineEditAction::ClearAll),
        KeyCode::Char(c)
            if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) && c != '\n' && c != '\r' =>
        {
            Some(LineEditAction::Insert(c))
        }
        _ => None,
    }
}

pub fn apply_line_edit_action(
    state: &mut LineEditorState,
    action: LineEditAction,
) -> LineEditOutcome {
    match action {
        LineEditAction::Insert(c) => {
            insert_str_at_cursor(&mut state.text, state.cursor, c.encode_utf8(&mut [0; 4]));
            state.cursor += 1;
            LineEditOutcome::TextChanged
        }
        LineEditAction::Backspace => {
            if state.cursor == 0 {
                return LineEditOutcome::Unchanged;
            }
            let end = char_to_byte_index(&state.text, state.cursor);
            let start = char_to_byte_index(&state.text, state.cursor - 1);
            state.text.replace_range(start..end, "");
            state.cursor -= 1;
            LineEditOutcome::TextChanged
        }
        LineEditAction::Delete => {
            let start = char_to_byte_index(&state.text, state.cursor);
            if start >= state.text.len() {
                return LineEditOutcome::Unchanged;
            }
            let end = char_to_byte_index(&state.text, state.cursor + 1);
            state.text.replace_range(start..end, "");
            LineEditOutcome::TextChanged
        }
        LineEditAction::MoveLeft => move_cursor(state, state.cursor.saturating_sub(1)),
        LineEditAction::MoveRight => {
            let len = state.text.chars().count();
            move_cursor(state, (state.cursor + 1).min(len))
        }
        LineEditAction::MoveStart => move_cursor(state, 0),
        LineEditAction::MoveEnd => {
            let len = state.text.chars().count();
            move_cursor(state, len)
        }
        LineEditAction::DeleteToEnd => {
            let byte_idx = char_to_byte_index(&state.text, state.cursor);
            if byte_idx >= state.text.len() {
                return LineEditOutcome::Unchanged;
            }
            state.text.truncate(byte_idx);
            LineEditOutcome::TextChanged
        }
        LineEditAction::DeleteWord => {
            if state.cursor == 0 {
                return LineEditOutcome::Unchanged;
            }
            state.cursor = delete_word_before_cursor(&mut state.text, state.cursor);
            LineEditOutcome::TextChanged
        }
        LineEditAction::ClearAll => {
            if state.text.is_empty() {
                return LineEditOutcome::Unchanged;
            }
            state.text.clear();
            state.cursor = 0;
            LineEditOutcome::TextChanged
        }
        LineEditAction::Paste(text) => {
            let first_line = text.split('\n').next().unwrap_or("");
            if first_line.is_empty() {
                return LineEditOutcome::Unchanged;
            }
            insert_str_at_cursor(&mut state.text, state.cursor, first_line);
            state.cursor += first_line.chars().count();
            LineEditOutcome::TextChanged
        }
    }
}

fn move_cursor(state: &mut LineEditorState, target: usize) -> LineEditOutcome {
    if state.cursor == target {
        LineEditOutcome::Unchanged
    } else {
        state.cursor = target;
        LineEditOutcome::CursorMoved
    }
}

fn insert_str_at_cursor(input: &mut String, cursor: usize, text: &str) {
    let byte_idx = char_to_byte_index(input, cursor);
    input.insert_str(byte_idx, text);
}

fn delete_word_before_cursor(input: &mut String, cursor: usize) -> usize {
    let mut chars: Vec<char> = input.chars().collect();
    let end = cursor.min(chars.len());
    let mut idx = end;
    while idx > 0 && chars[idx - 1] == ' ' {
        idx -= 1;
    }
    while idx > 0 && chars[idx - 1] != ' ' {
        idx -= 1;
    }
    chars.drain(idx..end);
    *input = chars.into_iter().collect();
    idx
}

fn char_to_byte_index(input: &str, char_index: usize) -> usize {
    input
        .char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
