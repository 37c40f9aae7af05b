use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User preferences read from `config.toml`.
///
/// Only presentation and integration settings live here. The link, an edited
/// template, and a hand-edited message belong to a single session and are
/// never written back.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
    /// File whose contents replace the built-in announcement template
    pub template_file: Option<PathBuf>,
    /// Shell command that receives the message on stdin instead of the
    /// platform clipboard tool (e.g. "xclip -selection primary")
    pub clipboard_command: Option<String>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/zoom-template/config.toml` → `~/.config/zoom-template/config.toml`
/// - Windows: paths are returned unchanged
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
