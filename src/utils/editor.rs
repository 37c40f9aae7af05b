//! External editor integration
//!
//! Long templates are easier to edit in the user's own editor. The terminal
//! must already be out of raw mode when [`edit_in_external_editor`] runs; the
//! compose loop suspends and restores it around the call.

use std::error::Error;
use std::fs;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Outcome of an editor session that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalEdit {
    /// The editor saved this text.
    Edited(String),
    /// `EDITOR` is not set.
    NoEditor,
    /// The editor exited unsuccessfully; contents are discarded.
    Aborted,
}

pub fn editor_command() -> Option<String> {
    match std::env::var("EDITOR") {
        Ok(editor) if !editor.trim().is_empty() => Some(editor),
        _ => None,
    }
}

pub fn edit_in_external_editor(initial: &str) -> Result<ExternalEdit, Box<dyn Error>> {
    let Some(editor) = editor_command() else {
        return Ok(ExternalEdit::NoEditor);
    };
    edit_with(&editor, initial)
}

fn edit_with(editor: &str, initial: &str) -> Result<ExternalEdit, Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let temp_path = temp_file.path().to_path_buf();
    fs::write(&temp_path, initial)?;

    // EDITOR may carry flags, e.g. "code --wait".
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(editor);
    info!(editor = program, "launching external editor");
    let status = Command::new(program).args(parts).arg(&temp_path).status()?;

    if !status.success() {
        warn!(%status, "editor exited with non-zero status");
        return Ok(ExternalEdit::Aborted);
    }

    let content = fs::read_to_string(&temp_path)?;
    Ok(ExternalEdit::Edited(strip_editor_newline(initial, content)))
}

/// Drop the one final newline an editor appends on save. Untouched files
/// come back exactly as written.
fn strip_editor_newline(initial: &str, content: String) -> String {
    if content == initial || initial.ends_with('\n') {
        return content;
    }
    match content.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped).to_string(),
        None => content,
    }
}
