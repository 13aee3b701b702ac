//! Command output against option files on disk.

use std::io::Write;

use consentbar_cli::cli::{Commands, ThemeArgs, execute};
use consentbar_cli::config::ThemeSource;
use consentbar_theme::{Preset, StyleSheet, Theme};

fn temp_json(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn run(command: Commands) -> String {
    let mut buf = Vec::new();
    execute(command, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn config_source(file: &tempfile::NamedTempFile) -> ThemeSource {
    ThemeSource {
        config: Some(file.path().to_path_buf()),
        ..ThemeSource::default()
    }
}

#[test]
fn resolve_prints_complete_theme_json() {
    let file = temp_json(r##"{"themes": {"dark": {"text-color": "#FAFAFA"}}}"##);
    let json = run(Commands::Resolve(ThemeArgs {
        name: "dark".into(),
        source: config_source(&file),
    }));
    let theme: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(theme.text_color, "#FAFAFA");
    assert_eq!(theme.radio_button_hover_background_color, "rgba(250, 250, 250, 0.8)");
    assert_eq!(theme.banner_background_color, Preset::Dark.theme().banner_background_color);
}

#[test]
fn css_matches_library_rendering() {
    let css = run(Commands::Css(ThemeArgs {
        name: "high-contrast".into(),
        source: ThemeSource::default(),
    }));
    assert_eq!(css, StyleSheet::from_theme(&Preset::HighContrast.theme()).to_css());
}

#[test]
fn list_themes_includes_custom_entries() {
    let light = serde_json::to_string(&Preset::Light.theme()).unwrap();
    let file = temp_json(&format!(r#"{{"themes": {{"brand": {light}}}}}"#));
    let names = run(Commands::ListThemes(ThemeArgs {
        name: "light".into(),
        source: config_source(&file),
    }));
    assert_eq!(names, "brand\ndark\nhigh-contrast\nlight\n");
}

#[test]
fn invalid_custom_theme_fails_with_config_exit_code() {
    let file = temp_json(r##"{"themes": {"gold": {"primary-button-color": "#FFD700"}}}"##);
    let mut buf = Vec::new();
    let err = execute(
        Commands::ListThemes(ThemeArgs {
            name: "light".into(),
            source: config_source(&file),
        }),
        &mut buf,
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().starts_with("invalid theme 'gold'"));
}
