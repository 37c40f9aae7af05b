//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod render;
pub mod settings;

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::cli::render::run_render;
use crate::cli::settings::{apply_set, apply_unset, describe, SettingRegistry};
use crate::core::app::App;
use crate::core::composer::TemplateComposer;
use crate::core::config::data::path_display;
use crate::core::config::{Config, ConfigError};
use crate::core::constants::{DEFAULT_TEMPLATE, PLACEHOLDER_TOKEN};
use crate::ui::compose_loop::run_compose;
use crate::ui::theme::Theme;
use crate::utils::clipboard::SystemClipboard;
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "zoom-template", version)]
#[command(about = "Fill a class announcement template with a Zoom link and copy it")]
#[command(
    long_about = "zoom-template keeps a class announcement template and fills its \
{{ZOOM_LINK}} placeholder with the meeting link you type. The finished message can be \
tweaked by hand and copied to the clipboard, ready to paste into a group chat.\n\n\
Controls:\n\
  Type              Enter the meeting link in the link field\n\
  Tab/Shift+Tab     Move between the link, template and preview panels\n\
  Enter             Edit the focused template or preview\n\
  Ctrl+Y            Copy the message to the clipboard\n\
  Ctrl+T / Ctrl+O   Edit the template / the preview\n\
  Ctrl+R            Reset a hand-edited preview to the template\n\
  Ctrl+S / Esc      Save / cancel an open editor\n\
  Ctrl+E            Open the editor contents in $EDITOR\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive composer (default)
    Compose {
        /// Meeting link to start with
        #[arg(long)]
        link: Option<String>,
        /// Template file to use instead of the configured one
        #[arg(short = 't', long, value_name = "FILE")]
        template_file: Option<PathBuf>,
    },
    /// Print the filled-in message without opening the interface
    Render {
        /// Meeting link to insert
        #[arg(long)]
        link: Option<String>,
        /// Template file to use instead of the configured one
        #[arg(short = 't', long, value_name = "FILE")]
        template_file: Option<PathBuf>,
        /// Also copy the message to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Show the configuration file location and current values
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let config_path = Config::resolve_path(args.config.as_deref())?;
    let registry = SettingRegistry::new();

    let command = args.command.unwrap_or(Commands::Compose {
        link: None,
        template_file: None,
    });

    match command {
        Commands::Compose {
            link,
            template_file,
        } => {
            let config = Config::load_from_path(&config_path)?;
            let composer = build_composer(&config, template_file.as_deref(), link.as_deref())?;
            let theme = resolve_theme(&config);
            let mut clipboard = SystemClipboard::with_command(config.clipboard_command.as_deref());
            let mut app = App::new(composer, theme);
            run_compose(&mut app, &mut clipboard)
        }
        Commands::Render {
            link,
            template_file,
            copy,
        } => {
            let config = Config::load_from_path(&config_path)?;
            let composer = build_composer(&config, template_file.as_deref(), link.as_deref())?;
            let mut clipboard = SystemClipboard::with_command(config.clipboard_command.as_deref());
            let code = run_render(&composer, copy, &mut clipboard, &mut io::stdout().lock())?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            match apply_set(&registry, &config_path, &key, &value) {
                Ok(message) => println!("{message}"),
                Err(e) => {
                    e.print();
                    std::process::exit(e.exit_code());
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            match apply_unset(&registry, &config_path, &key) {
                Ok(message) => println!("{message}"),
                Err(e) => {
                    e.print();
                    std::process::exit(e.exit_code());
                }
            }
            Ok(())
        }
        Commands::Config => {
            let config = Config::load_from_path(&config_path)?;
            println!("Config file: {}", path_display(&config_path));
            println!("Current configuration:");
            println!("{}", describe(&registry, &config));
            Ok(())
        }
    }
}

/// Pick the template: an explicit file, then the configured file, then the
/// built-in announcement.
pub fn load_template(
    config: &Config,
    override_path: Option<&Path>,
) -> Result<String, ConfigError> {
    if let Some(path) = override_path {
        return fs::read_to_string(path).map_err(|source| ConfigError::TemplateRead {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(config
        .load_template()?
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()))
}

pub fn build_composer(
    config: &Config,
    template_file: Option<&Path>,
    link: Option<&str>,
) -> Result<TemplateComposer, ConfigError> {
    let template = load_template(config, template_file)?;
    let mut composer = TemplateComposer::with_template(template);
    if let Some(link) = link {
        composer.set_link_value(link);
    }
    if !composer.has_placeholder() {
        warn!(placeholder = PLACEHOLDER_TOKEN, "template has no link placeholder");
    }
    info!(
        link_present = composer.is_link_value_present(),
        "composer ready"
    );
    Ok(composer)
}

pub fn resolve_theme(config: &Config) -> Theme {
    match config.theme.as_deref() {
        Some(name) => Theme::from_name(name).unwrap_or_else(|| {
            warn!(theme = name, "unknown theme in config, using dark");
            Theme::dark_default()
        }),
        None => Theme::dark_default(),
    }
}

#[cfg(test)]
mod tests;
