//! Interactive session state.
//!
//! [`App`] pairs the [`TemplateComposer`] with what the screen needs around it:
//! focus, the link field's cursor, an optional editor dialog, and a transient
//! status notice. All composer mutations from the UI go through here.

pub mod ui_state;

use std::time::Instant;

use tracing::debug;

use crate::core::composer::TemplateComposer;
use crate::ui::theme::Theme;
use crate::utils::clipboard::{export_output, ClipboardSink};
use crate::utils::editor::ExternalEdit;
use crate::utils::input::{sanitize_link_paste, sanitize_text_input};
use crate::utils::line_editor::{apply_line_edit_action, LineEditAction, LineEditOutcome};

pub use ui_state::{EditTarget, EditorDialog, Focus, StatusKind, StatusMessage, UiState};

pub const COPY_SUCCESS_MESSAGE: &str = "Message copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy message";
pub const MISSING_LINK_MESSAGE: &str = "Enter a Zoom link before copying";

pub struct App {
    pub composer: TemplateComposer,
    pub theme: Theme,
    pub ui: UiState,
}

impl App {
    pub fn new(composer: TemplateComposer, theme: Theme) -> Self {
        let ui = UiState::new(composer.link_value());
        Self {
            composer,
            theme,
            ui,
        }
    }

    /// Apply an edit to the link field. Any change to the text is forwarded to
    /// the composer, which discards a manual edit of the message.
    pub fn edit_link(&mut self, action: LineEditAction) -> LineEditOutcome {
        let outcome = apply_line_edit_action(&mut self.ui.link_editor, action);
        if outcome == LineEditOutcome::TextChanged {
            let was_overridden = self.composer.is_overridden();
            self.composer.set_link_value(self.ui.link_editor.text.clone());
            if was_overridden {
                debug!("link changed, manual edit discarded");
            }
        }
        outcome
    }

    /// Route a bracketed paste to whatever currently has input focus.
    pub fn paste(&mut self, raw: &str) {
        if let Some(dialog) = self.ui.dialog.as_mut() {
            dialog.textarea.insert_str(sanitize_text_input(raw));
            return;
        }
        if self.ui.focus == Focus::Link {
            let line = sanitize_link_paste(raw);
            self.edit_link(LineEditAction::Paste(line));
        }
    }

    pub fn open_editor(&mut self, target: EditTarget) {
        let text = match target {
            EditTarget::Template => self.composer.template(),
            EditTarget::Output => self.composer.output(),
        };
        self.ui.dialog = Some(EditorDialog::new(target, text, &self.theme));
    }

    /// Commit the open dialog to the composer and close it.
    pub fn save_editor(&mut self) {
        let Some(dialog) = self.ui.dialog.take() else {
            return;
        };
        let text = dialog.text();
        match dialog.target {
            EditTarget::Template => {
                self.composer.set_template(text);
                if self.composer.is_overridden() {
                    self.set_status(
                        "Template saved; preview keeps your manual edit",
                        StatusKind::Info,
                    );
                } else {
                    self.set_status("Template saved", StatusKind::Info);
                }
            }
            EditTarget::Output => {
                self.composer.set_output(text);
                self.set_status("Preview edited manually", StatusKind::Info);
            }
        }
        debug!(edit_target = ?dialog.target, "editor dialog saved");
    }

    pub fn cancel_editor(&mut self) {
        self.ui.dialog = None;
    }

    /// Feed the result of an `$EDITOR` session back into the open dialog.
    /// The dialog stays open so the user can still save or cancel.
    pub fn apply_external_edit(&mut self, outcome: ExternalEdit) {
        match outcome {
            ExternalEdit::Edited(text) => {
                if let Some(dialog) = self.ui.dialog.as_mut() {
                    dialog.replace_text(&text);
                }
            }
            ExternalEdit::NoEditor => self.set_status(
                "No EDITOR environment variable set (e.g. export EDITOR=nano)",
                StatusKind::Warning,
            ),
            ExternalEdit::Aborted => self.set_status(
                "Editor exited with non-zero status; changes discarded",
                StatusKind::Warning,
            ),
        }
    }

    /// Copy the message to `sink`. Without a link nothing is exported.
    pub fn copy_output(&mut self, sink: &mut dyn ClipboardSink) -> bool {
        if !self.composer.is_link_value_present() {
            self.set_status(MISSING_LINK_MESSAGE, StatusKind::Warning);
            return false;
        }
        let copied = export_output(&self.composer, sink);
        if copied {
            self.set_status(COPY_SUCCESS_MESSAGE, StatusKind::Info);
        } else {
            self.set_status(COPY_FAILURE_MESSAGE, StatusKind::Error);
        }
        copied
    }

    /// Drop a manual edit. Offered only while the preview is overridden.
    pub fn reset_output(&mut self) {
        if !self.composer.is_overridden() {
            self.set_status("Preview already follows the template", StatusKind::Info);
            return;
        }
        self.composer.reset_to_template();
        self.set_status("Preview reset to template", StatusKind::Info);
    }

    pub fn focus_next(&mut self) {
        self.ui.focus = self.ui.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.ui.focus = self.ui.focus.previous();
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.ui.status = Some(StatusMessage {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        });
    }

    /// Clear an expired notice. Returns true when something was cleared.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self
            .ui
            .status
            .as_ref()
            .is_some_and(|status| status.is_expired(now))
        {
            self.ui.status = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests;
