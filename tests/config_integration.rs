// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config, DEFAULT_TIMEOUT_SECS};
use iced_gallery::error::Error;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::theming::ThemeMode;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn write_settings(path: &Path, settings: &Config) {
    let content = toml::to_string(settings).expect("Failed to serialize settings");
    std::fs::write(path, content).expect("Failed to write settings file");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    write_settings(&path, &settings);

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("search-button"), "Search");

    settings.general.language = Some("fr".to_string());
    write_settings(&path, &settings);

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("search-button"), "Rechercher");
}

#[test]
fn cli_language_beats_config() {
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn hand_written_settings_file_is_understood() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[general]
theme_mode = "Dark"

[api]
key = "from-file"
timeout_secs = 500
safesearch = false

[display]
columns = 1
"#,
    )
    .expect("Failed to write settings file");

    let loaded = config::load_from_path(&path).expect("Failed to load settings");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.display.columns(), 2);

    let pixabay = loaded.api.to_pixabay_settings(None);
    assert_eq!(pixabay.api_key.as_deref(), Some("from-file"));
    assert_eq!(pixabay.timeout, Duration::from_secs(120));
    assert!(!pixabay.safesearch);
    assert_eq!(pixabay.endpoint, "https://pixabay.com/api/");

    let overridden = loaded.api.to_pixabay_settings(Some("from-cli".to_string()));
    assert_eq!(overridden.api_key.as_deref(), Some("from-cli"));
}

#[test]
fn unreadable_settings_fall_back_to_defaults_with_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[display\ncolumns = ")
        .expect("Failed to write settings file");

    let (loaded, problem) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(matches!(problem, Some(Error::Config(_))));
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, problem) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(problem.is_none());
    assert_eq!(
        loaded.api.timeout(),
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
}
