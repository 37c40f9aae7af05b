use super::data::Config;
use super::io::ConfigError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        theme: Some("light".to_string()),
        template_file: Some(PathBuf::from("/tmp/announcement.txt")),
        clipboard_command: None,
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let mut config = loaded;
    config.theme = None;
    config.clipboard_command = Some("xclip -selection primary".to_string());
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.theme, None);
    assert_eq!(
        loaded.clipboard_command.as_deref(),
        Some("xclip -selection primary")
    );
}

#[test]
fn test_keys_are_kebab_case_on_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "theme = \"dark\"\ntemplate-file = \"t.txt\"\nclipboard-command = \"wl-copy\"\n",
    )
    .expect("write");

    let config = Config::load_from_path(&config_path).expect("load");
    assert_eq!(config.theme.as_deref(), Some("dark"));
    assert_eq!(config.template_file, Some(PathBuf::from("t.txt")));
    assert_eq!(config.clipboard_command.as_deref(), Some("wl-copy"));

    let written = toml::to_string_pretty(&config).expect("serialize");
    assert!(written.contains("template-file"));
    assert!(written.contains("clipboard-command"));
}

#[test]
fn test_parse_error_names_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "theme = [unterminated").expect("write");

    let err = Config::load_from_path(&config_path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_load_template_reads_configured_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template_path = temp_dir.path().join("template.txt");
    std::fs::write(&template_path, "Class today: {{ZOOM_LINK}}").expect("write");

    let config = Config {
        template_file: Some(template_path),
        ..Default::default()
    };
    assert_eq!(
        config.load_template().expect("template").as_deref(),
        Some("Class today: {{ZOOM_LINK}}")
    );
}

#[test]
fn test_load_template_without_file_is_none() {
    assert!(Config::default().load_template().expect("ok").is_none());
}

#[test]
fn test_missing_template_file_is_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        template_file: Some(temp_dir.path().join("missing.txt")),
        ..Default::default()
    };
    let err = config.load_template().expect_err("missing file");
    assert!(matches!(err, ConfigError::TemplateRead { .. }));
}

#[test]
fn test_resolve_path_prefers_override() {
    let explicit = PathBuf::from("/tmp/custom.toml");
    assert_eq!(
        Config::resolve_path(Some(&explicit)).expect("resolve"),
        explicit
    );
}
