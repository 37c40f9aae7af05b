//! Settings management for CLI set/unset commands.
//!
//! Each persisted key has a [`SettingHandler`] that validates input and
//! edits an in-memory [`Config`]; [`apply_set`] and [`apply_unset`] wrap
//! that in a load and an atomic save of the config file.

pub mod error;
pub mod handlers;
pub mod registry;

use std::path::Path;

use tracing::info;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Validate `args` and store the value. Returns the message to display.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value so the built-in default applies again.
    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;

    /// Format the current value for display in `zoom-template config` output.
    fn format(&self, config: &Config) -> String;
}

pub fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

pub fn apply_set(
    registry: &SettingRegistry,
    config_path: &Path,
    key: &str,
    args: &[String],
) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    mutate_config(config_path, |config| handler.set(args, config))
}

pub fn apply_unset(
    registry: &SettingRegistry,
    config_path: &Path,
    key: &str,
) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    mutate_config(config_path, |config| handler.unset(config))
}

/// Every setting, one per line, in registration order.
pub fn describe(registry: &SettingRegistry, config: &Config) -> String {
    registry
        .keys_display_order()
        .iter()
        .filter_map(|key| registry.get(key))
        .map(|handler| handler.format(config))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mutate_config<F>(config_path: &Path, f: F) -> Result<String, SettingError>
where
    F: FnOnce(&mut Config) -> Result<String, SettingError>,
{
    let mut config = Config::load_from_path(config_path)
        .map_err(|e| SettingError::ConfigError(e.to_string()))?;
    let message = f(&mut config)?;
    config
        .save_to_path(config_path)
        .map_err(|e| SettingError::ConfigError(e.to_string()))?;
    info!(path = %config_path.display(), "config updated");
    Ok(message)
}
