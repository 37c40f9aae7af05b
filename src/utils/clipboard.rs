//! Clipboard export.
//!
//! The composer never talks to a clipboard itself. Callers hand
//! [`TemplateComposer::output_for_export`] to a [`ClipboardSink`] and surface the
//! boolean outcome to the user.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::core::composer::TemplateComposer;

#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard command could be found on this system.
    NotAvailable,
    /// The command ran but exited unsuccessfully.
    CommandFailed { command: String },
    /// The command could not be spawned or written to.
    Io {
        command: String,
        source: std::io::Error,
    },
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(
                f,
                "No clipboard command found (install wl-copy, xclip, or xsel)"
            ),
            ClipboardError::CommandFailed { command } => {
                write!(f, "Clipboard command `{command}` failed")
            }
            ClipboardError::Io { command, source } => {
                write!(f, "Clipboard command `{command}` not available: {source}")
            }
        }
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipboardError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Anything that can receive the finished message.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Hand the composer's current output to `sink`, reporting success as a flag.
///
/// Composer state is never touched, whatever the outcome.
pub fn export_output(composer: &TemplateComposer, sink: &mut dyn ClipboardSink) -> bool {
    match sink.copy(composer.output_for_export()) {
        Ok(()) => {
            debug!(bytes = composer.output_for_export().len(), "message exported");
            true
        }
        Err(err) => {
            warn!(error = %err, "failed to export message");
            false
        }
    }
}

/// Platform clipboard reached through the usual command-line tools.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    custom_command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `command` (split on whitespace) instead of searching for a tool.
    /// A blank command falls back to the search.
    pub fn with_command(command: Option<&str>) -> Self {
        let custom_command = command
            .map(|cmd| {
                cmd.split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|parts| !parts.is_empty());
        Self { custom_command }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(parts) = &self.custom_command {
            let args: Vec<&str> = parts[1..].iter().map(String::as_str).collect();
            return run_with_stdin(&parts[0], &args, text);
        }
        copy_with_platform_tool(text)
    }
}

fn copy_with_platform_tool(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "macos")]
    {
        return run_with_stdin("pbcopy", &[], text);
    }
    #[cfg(target_os = "windows")]
    {
        return run_with_stdin("cmd", &["/C", "clip"], text);
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let candidates: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];
        for (cmd, args) in candidates {
            match run_with_stdin(cmd, args, text) {
                Ok(()) => return Ok(()),
                Err(err) => debug!(command = cmd, error = %err, "clipboard tool unavailable"),
            }
        }
        Err(ClipboardError::NotAvailable)
    }
}

fn run_with_stdin(cmd: &str, args: &[&str], input: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Io {
            command: cmd.to_string(),
            source,
        })?;

    // Exit status decides success; some tools close stdin early.
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }

    match child.wait() {
        Ok(status) if status.success() => Ok(()),
        Ok(_) => Err(ClipboardError::CommandFailed {
            command: cmd.to_string(),
        }),
        Err(source) => Err(ClipboardError::Io {
            command: cmd.to_string(),
            source,
        }),
    }
}

/// In-memory sink used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardSink for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_hands_over_output_verbatim() {
        let mut composer = TemplateComposer::with_template("Join {{ZOOM_LINK}} ");
        composer.set_link_value("https://zoom.us/j/9");
        let mut sink = RecordingClipboard::default();

        assert!(export_output(&composer, &mut sink));
        assert_eq!(sink.copied, vec!["Join https://zoom.us/j/9 ".to_string()]);
    }

    #[test]
    fn failed_export_reports_false_and_leaves_state_alone() {
        let mut composer = TemplateComposer::new();
        composer.set_output("manual");
        let before = composer.clone();
        let mut sink = RecordingClipboard {
            fail: true,
            ..Default::default()
        };

        assert!(!export_output(&composer, &mut sink));
        assert_eq!(composer, before);
    }

    #[test]
    fn blank_custom_command_falls_back_to_search() {
        let clipboard = SystemClipboard::with_command(Some("   "));
        assert!(clipboard.custom_command.is_none());
    }

    #[test]
    fn custom_command_is_split_into_program_and_args() {
        let clipboard = SystemClipboard::with_command(Some("xclip -selection primary"));
        assert_eq!(
            clipboard.custom_command,
            Some(vec![
                "xclip".to_string(),
                "-selection".to_string(),
                "primary".to_string()
            ])
        );
    }

    #[cfg(unix)]
    #[test]
    fn missing_custom_command_is_an_io_error() {
        let mut clipboard =
            SystemClipboard::with_command(Some("zoom-template-no-such-clipboard-tool"));
        let err = clipboard.copy("text").expect_err("command should not exist");
        assert!(matches!(err, ClipboardError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn custom_command_receives_text_on_stdin() {
        let mut clipboard = SystemClipboard::with_command(Some("cat"));
        assert!(clipboard.copy("hello").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failing_custom_command_is_reported() {
        let mut clipboard = SystemClipboard::with_command(Some("false"));
        let err = clipboard.copy("hello").expect_err("false exits non-zero");
        assert!(matches!(err, ClipboardError::CommandFailed { .. }));
    }
}
