// SPDX-License-Identifier: MPL-2.0
use cat_lens::config::{self, DEFAULT_BREED};
use cat_lens::domain::catalog::BreedId;
use cat_lens::i18n::fluent::I18n;
use cat_lens::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write config");
    let english = config::load_from_path(&path).expect("load english config");
    assert_eq!(I18n::new(None, &english).current_locale().to_string(), "en-US");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write config");
    let french = config::load_from_path(&path).expect("load french config");
    let i18n = I18n::new(None, &french);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(
        i18n.tr_with_args("detail-unavailable", &[("id", "abc")]),
        "Impossible de récupérer les informations du chat abc"
    );
}

#[test]
fn cli_language_beats_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write config");

    let config = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(Some("en-US".into()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn full_config_file_round_trips_into_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[general]
theme_mode = "light"

[api]
api_key = "abc"
page_limit = 8

[browser]
default_breed = "pers"
columns = 3
breeds = [
    { id = "pers", label = "Persian" },
    { id = "abys", label = "Abyssinian" },
]
"#,
    )
    .expect("write config");

    let config = config::load_from_path(&path).expect("load config");

    assert_eq!(config.general.theme_mode, ThemeMode::Light);
    assert_eq!(config.api.api_key, "abc");
    assert_eq!(config.api.page_limit(), 8);
    assert_eq!(config.browser.initial_breed(), BreedId::new("pers"));
    assert_eq!(config.browser.columns(), 3);
    let labels: Vec<String> = config
        .browser
        .breed_options()
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Persian", "Abyssinian"]);
}

#[test]
fn missing_config_dir_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().join("absent")));

    assert!(warning.is_none());
    assert_eq!(config.browser.initial_breed(), BreedId::new(DEFAULT_BREED));
}

#[test]
fn broken_config_file_warns_and_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(config.browser.columns(), config::DEFAULT_GRID_COLUMNS);
}
