use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;
use shared::domain::InitialSelection;

pub const DEFAULT_CONFIG_FILE: &str = "roulette.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub roster: Option<String>,
    pub group_size: usize,
    pub initial_selection: InitialSelection,
    pub output: OutputFormat,
    pub http_timeout_seconds: u64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster: None,
            group_size: 0,
            initial_selection: InitialSelection::All,
            output: OutputFormat::Text,
            http_timeout_seconds: 10,
            log_level: "info".into(),
        }
    }
}

impl Settings {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds.max(1))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    roster: Option<String>,
    group_size: Option<usize>,
    initial_selection: Option<InitialSelection>,
    output: Option<OutputFormat>,
    http_timeout_seconds: Option<u64>,
    log_level: Option<String>,
}

/// Defaults, then the config file, then environment overrides. An explicit
/// `path` must exist; the default `roulette.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    if let Some(raw) = raw {
        apply_file(&mut settings, &raw)?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw).context("invalid roulette config")?;
    if let Some(v) = file_cfg.roster {
        settings.roster = Some(v);
    }
    if let Some(v) = file_cfg.group_size {
        settings.group_size = v;
    }
    if let Some(v) = file_cfg.initial_selection {
        settings.initial_selection = v;
    }
    if let Some(v) = file_cfg.output {
        settings.output = v;
    }
    if let Some(v) = file_cfg.http_timeout_seconds {
        settings.http_timeout_seconds = v;
    }
    if let Some(v) = file_cfg.log_level {
        settings.log_level = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("ROULETTE_ROSTER") {
        settings.roster = Some(v);
    }
    if let Some(v) = var("APP__ROSTER") {
        settings.roster = Some(v);
    }

    if let Some(v) = var("APP__GROUP_SIZE") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.group_size = parsed;
        }
    }

    if let Some(v) = var("APP__INITIAL_SELECTION") {
        match v.trim().to_ascii_lowercase().as_str() {
            "all" => settings.initial_selection = InitialSelection::All,
            "none" => settings.initial_selection = InitialSelection::None,
            _ => {}
        }
    }

    if let Some(v) = var("APP__OUTPUT") {
        if let Ok(parsed) = OutputFormat::from_str(v.trim(), true) {
            settings.output = parsed;
        }
    }

    if let Some(v) = var("APP__HTTP_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.http_timeout_seconds = parsed;
        }
    }

    if let Some(v) = var("APP__LOG_LEVEL") {
        settings.log_level = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
