//! Handlers for each persisted setting.

use std::fs;
use std::path::PathBuf;

use super::error::SettingError;
use super::{success_set, success_unset, SettingHandler};
use crate::core::config::data::{path_display, Config};
use crate::ui::theme::Theme;

/// Handler for the `theme` setting.
pub struct ThemeHandler;

impl SettingHandler for ThemeHandler {
    fn key(&self) -> &'static str {
        "theme"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set a theme, specify the theme name:",
                example: "zoom-template set theme light",
            });
        }

        let input = args.join(" ");
        let theme = Theme::from_name(&input).ok_or(SettingError::UnknownTheme { input })?;
        config.theme = Some(theme.id.to_string());
        Ok(success_set("theme", theme.id))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.theme = None;
        Ok(success_unset("theme"))
    }

    fn format(&self, config: &Config) -> String {
        match &config.theme {
            Some(theme) => format!("  theme: {theme}"),
            None => "  theme: (unset, default: dark)".to_string(),
        }
    }
}

/// Handler for the `template-file` setting.
pub struct TemplateFileHandler;

impl SettingHandler for TemplateFileHandler {
    fn key(&self) -> &'static str {
        "template-file"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To use your own template, specify a file path:",
                example: "zoom-template set template-file ~/class-template.txt",
            });
        }

        let requested = PathBuf::from(args.join(" "));
        // Stored absolute so the setting works from any directory.
        let path = fs::canonicalize(&requested)
            .ok()
            .filter(|path| path.is_file())
            .ok_or(SettingError::MissingFile { path: requested })?;
        let message = success_set("template-file", &path_display(&path));
        config.template_file = Some(path);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.template_file = None;
        Ok("✅ Unset template-file (will use the built-in template)".to_string())
    }

    fn format(&self, config: &Config) -> String {
        match &config.template_file {
            Some(path) => format!("  template-file: {}", path_display(path)),
            None => "  template-file: (built-in template)".to_string(),
        }
    }
}

/// Handler for the `clipboard-command` setting.
pub struct ClipboardCommandHandler;

impl SettingHandler for ClipboardCommandHandler {
    fn key(&self) -> &'static str {
        "clipboard-command"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let command = args.join(" ");
        if command.trim().is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To override the clipboard tool, give a command that reads stdin:",
                example: "zoom-template set clipboard-command xclip -selection clipboard",
            });
        }

        let message = success_set("clipboard-command", &command);
        config.clipboard_command = Some(command);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.clipboard_command = None;
        Ok("✅ Unset clipboard-command (will auto-detect)".to_string())
    }

    fn format(&self, config: &Config) -> String {
        match &config.clipboard_command {
            Some(command) => format!("  clipboard-command: {command}"),
            None => "  clipboard-command: (auto-detect)".to_string(),
        }
    }
}
