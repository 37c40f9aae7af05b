//! Input utilities for terminal applications
//!
//! Pasted text arrives raw from the terminal; these helpers normalise it before
//! it reaches the link field or an editor dialog.

/// Sanitize text input to prevent TUI corruption
///
/// This function:
/// - Converts tabs to 4 spaces
/// - Converts CRLF pairs and lone carriage returns to a single newline
/// - Filters out control characters except newlines
pub fn sanitize_text_input(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\t' => sanitized.push_str("    "),
            '\r' => {
                chars.next_if_eq(&'\n');
                sanitized.push('\n');
            }
            '\n' => sanitized.push(c),
            _ if !c.is_control() => sanitized.push(c),
            _ => {}
        }
    }

    sanitized
}

/// Reduce a paste to the single line the link field can hold.
///
/// Leading blank lines are skipped so a link copied with a stray newline in
/// front still lands in the field.
pub fn sanitize_link_paste(text: &str) -> String {
    sanitize_text_input(text)
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .to_string()
}
