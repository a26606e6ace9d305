use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_leave_rolling_disabled() {
    let settings = Settings::default();
    assert_eq!(settings.group_size, 0);
    assert_eq!(settings.initial_selection, InitialSelection::All);
    assert_eq!(settings.output, OutputFormat::Text);
    assert!(settings.roster.is_none());
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
            roster = "team.json"
            group_size = 4
            initial_selection = "none"
            output = "json"
            http_timeout_seconds = 3
        "#,
    )
    .expect("config");

    assert_eq!(settings.roster.as_deref(), Some("team.json"));
    assert_eq!(settings.group_size, 4);
    assert_eq!(settings.initial_selection, InitialSelection::None);
    assert_eq!(settings.output, OutputFormat::Json);
    assert_eq!(settings.http_timeout(), Duration::from_secs(3));
    assert_eq!(settings.log_level, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "group_size = \"many\"").is_err());
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "roster = \"file.json\"\ngroup_size = 2").expect("config");
    apply_env(
        &mut settings,
        env_from(&[
            ("ROULETTE_ROSTER", "legacy.json"),
            ("APP__ROSTER", "https://example.com/members"),
            ("APP__GROUP_SIZE", "6"),
            ("APP__OUTPUT", "JSON"),
            ("APP__INITIAL_SELECTION", "None"),
        ]),
    );

    assert_eq!(settings.roster.as_deref(), Some("https://example.com/members"));
    assert_eq!(settings.group_size, 6);
    assert_eq!(settings.output, OutputFormat::Json);
    assert_eq!(settings.initial_selection, InitialSelection::None);
}

#[test]
fn unparsable_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("APP__GROUP_SIZE", "lots"),
            ("APP__OUTPUT", "yaml"),
            ("APP__HTTP_TIMEOUT_SECONDS", "-1"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn zero_timeout_is_raised_to_one_second() {
    let settings = Settings {
        http_timeout_seconds: 0,
        ..Settings::default()
    };
    assert_eq!(settings.http_timeout(), Duration::from_secs(1));
}

#[test]
fn explicit_missing_config_path_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings(Some(&dir.path().join("absent.toml"))).expect_err("missing");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn explicit_config_path_is_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "group_size = 3\nlog_level = \"debug\"\n").expect("write");
    let settings = load_settings(Some(&path)).expect("settings");
    assert_eq!(settings.group_size, 3);
    assert_eq!(settings.log_level, "debug");
}
