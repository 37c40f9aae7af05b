use std::time::{Duration, Instant};

use tui_textarea::{CursorMove, TextArea};

use crate::ui::theme::Theme;
use crate::utils::line_editor::LineEditorState;

/// How long a status notice stays on screen.
pub const STATUS_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Link,
    Template,
    Output,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Link => Focus::Template,
            Focus::Template => Focus::Output,
            Focus::Output => Focus::Link,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Link => Focus::Output,
            Focus::Template => Focus::Link,
            Focus::Output => Focus::Template,
        }
    }
}

/// Which composer field an editor dialog writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Template,
    Output,
}

impl EditTarget {
    pub fn title(self) -> &'static str {
        match self {
            EditTarget::Template => "Edit Template",
            EditTarget::Output => "Edit Preview",
        }
    }
}

/// Multi-line editor shown over the main screen.
pub struct EditorDialog {
    pub target: EditTarget,
    pub textarea: TextArea<'static>,
}

impl EditorDialog {
    pub fn new(target: EditTarget, text: &str, theme: &Theme) -> Self {
        let mut dialog = Self {
            target,
            textarea: TextArea::default(),
        };
        dialog.replace_text(text);
        dialog.configure(theme);
        dialog
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Swap in new contents, keeping the cursor at the end like a fresh dialog.
    pub fn replace_text(&mut self, text: &str) {
        let style = self.textarea.style();
        let cursor_style = self.textarea.cursor_style();
        self.textarea = TextArea::from(text.split('\n').map(str::to_string));
        self.textarea.set_style(style);
        self.textarea.set_cursor_style(cursor_style);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    fn configure(&mut self, theme: &Theme) {
        self.textarea.set_style(theme.dialog_text_style);
        self.textarea.set_cursor_style(theme.dialog_cursor_style);
        self.textarea.set_cursor_line_style(ratatui::style::Style::default());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub created_at: Instant,
}

impl StatusMessage {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= STATUS_TTL
    }
}

pub struct UiState {
    pub focus: Focus,
    pub link_editor: LineEditorState,
    pub dialog: Option<EditorDialog>,
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn new(link: &str) -> Self {
        Self {
            focus: Focus::Link,
            link_editor: LineEditorState::with_text(link.to_string()),
            dialog: None,
            status: None,
        }
    }
}
