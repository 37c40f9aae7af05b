use super::*;
use tempfile::TempDir;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_means_compose() {
    let args = parse_args(&["zoom-template"]);
    assert!(args.command.is_none());
    assert!(args.log.is_none());
}

#[test]
fn compose_accepts_link_and_template_file() {
    let argv = [
        "zoom-template",
        "compose",
        "--link",
        "https://zoom.us/j/42",
        "-t",
        "class.txt",
    ];
    match parse_args(&argv).command {
        Some(Commands::Compose {
            link,
            template_file,
        }) => {
            assert_eq!(link.as_deref(), Some("https://zoom.us/j/42"));
            assert_eq!(template_file, Some(PathBuf::from("class.txt")));
        }
        _ => panic!("expected compose subcommand for argv={argv:?}"),
    }
}

#[test]
fn global_flags_follow_subcommands() {
    let argv = [
        "zoom-template",
        "render",
        "--copy",
        "--log",
        "out.log",
        "--config",
        "alt.toml",
    ];
    let args = parse_args(&argv);
    assert_eq!(args.log, Some(PathBuf::from("out.log")));
    assert_eq!(args.config, Some(PathBuf::from("alt.toml")));
    assert!(matches!(args.command, Some(Commands::Render { copy: true, .. })));
}

#[test]
fn set_collects_multi_word_values() {
    let argv = [
        "zoom-template",
        "set",
        "clipboard-command",
        "xclip",
        "-selection",
        "clipboard",
    ];
    match parse_args(&argv).command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "clipboard-command");
            assert_eq!(value, vec!["xclip", "-selection", "clipboard"]);
        }
        _ => panic!("expected set subcommand for argv={argv:?}"),
    }
}

#[test]
fn built_in_template_is_the_fallback() {
    let template = load_template(&Config::default(), None).expect("template");
    assert_eq!(template, DEFAULT_TEMPLATE);
}

#[test]
fn explicit_template_file_beats_config() {
    let dir = TempDir::new().expect("tempdir");
    let configured = dir.path().join("configured.txt");
    let explicit = dir.path().join("explicit.txt");
    std::fs::write(&configured, "configured {{ZOOM_LINK}}").expect("write");
    std::fs::write(&explicit, "explicit {{ZOOM_LINK}}").expect("write");

    let config = Config {
        template_file: Some(configured),
        ..Config::default()
    };
    assert_eq!(
        load_template(&config, Some(&explicit)).expect("template"),
        "explicit {{ZOOM_LINK}}"
    );
    assert_eq!(
        load_template(&config, None).expect("template"),
        "configured {{ZOOM_LINK}}"
    );
}

#[test]
fn missing_explicit_template_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = load_template(&Config::default(), Some(&dir.path().join("gone.txt"))).unwrap_err();
    assert!(matches!(err, ConfigError::TemplateRead { .. }));
}

#[test]
fn build_composer_applies_initial_link() {
    let composer = build_composer(&Config::default(), None, Some("https://zoom.us/j/7"))
        .expect("composer");
    assert!(composer.output().contains("https://zoom.us/j/7"));
    assert!(!composer.output().contains("{{ZOOM_LINK}}"));
    assert!(!composer.is_overridden());
}

#[test]
fn unknown_theme_falls_back_to_dark() {
    let config = Config {
        theme: Some("sepia".to_string()),
        ..Config::default()
    };
    assert_eq!(resolve_theme(&config).id, "dark");

    let config = Config {
        theme: Some("light".to_string()),
        ..Config::default()
    };
    assert_eq!(resolve_theme(&config).id, "light");
}
