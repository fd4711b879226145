use std::{collections::HashMap, fs, path::PathBuf, time::Duration};

use clap::Parser;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "violin.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            static_dir: PathBuf::from("./static"),
            request_timeout: Duration::from_secs(5),
            shutdown_timeout: Duration::from_secs(5),
            log_filter: "info".into(),
        }
    }
}

/// Flat `key = value` table; values may be strings or integers.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct FileSettings(HashMap<String, toml::Value>);

impl FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            toml::Value::String(v) => Some(v.clone()),
            toml::Value::Integer(v) => Some(v.to_string()),
            _ => None,
        }
    }
}

/// Command-line overrides; anything given here wins over file and
/// environment.
#[derive(Debug, Default, Parser)]
#[command(name = "server", about = "Violin practice web server")]
pub struct Cli {
    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub bind_addr: Option<String>,
    /// Directory holding img/, mp3/ and css/
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,
    #[arg(long, value_name = "SECS")]
    pub shutdown_timeout_secs: Option<u64>,
    /// tracing filter directives, e.g. `info,tower_http=debug`
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.bind_addr {
            settings.bind_addr = v;
        }
        if let Some(v) = self.static_dir {
            settings.static_dir = v;
        }
        if let Some(v) = self.request_timeout_secs {
            settings.request_timeout = Duration::from_secs(v);
        }
        if let Some(v) = self.shutdown_timeout_secs {
            settings.shutdown_timeout = Duration::from_secs(v);
        }
        if let Some(v) = self.log_filter {
            settings.log_filter = v;
        }
    }
}

/// Defaults, overlaid by `violin.toml` in the working directory, the
/// environment and finally the command line.
pub fn load_settings(cli: Cli) -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    let mut settings = settings_from(file.as_deref(), |name| std::env::var(name).ok());
    cli.apply(&mut settings);
    settings
}

pub fn settings_from(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(file_cfg) = file.and_then(|raw| toml::from_str::<FileSettings>(raw).ok()) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.bind_addr = v;
        }
        if let Some(v) = file_cfg.get("static_dir") {
            settings.static_dir = PathBuf::from(v);
        }
        if let Some(v) = file_cfg.get("request_timeout_secs").and_then(|v| parse_secs(&v)) {
            settings.request_timeout = v;
        }
        if let Some(v) = file_cfg.get("shutdown_timeout_secs").and_then(|v| parse_secs(&v)) {
            settings.shutdown_timeout = v;
        }
        if let Some(v) = file_cfg.get("log_filter") {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("VIOLIN_BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("VIOLIN_STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }
    if let Some(v) = env("APP__STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }

    if let Some(v) = env("VIOLIN_REQUEST_TIMEOUT_SECS").and_then(|v| parse_secs(&v)) {
        settings.request_timeout = v;
    }
    if let Some(v) = env("VIOLIN_SHUTDOWN_TIMEOUT_SECS").and_then(|v| parse_secs(&v)) {
        settings.shutdown_timeout = v;
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }

    settings
}

fn parse_secs(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_secs)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
