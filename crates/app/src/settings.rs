//! Handles settings for the application. Configuration is written in
//! `settings.toml`; any value can be overridden with a `KHATA__`-prefixed
//! environment variable (e.g. `KHATA__SHEETS__TOKEN`).
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_level() -> String {
    "info".to_string()
}

fn default_tab() -> String {
    "Expenses".to_string()
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Telegram {
    pub token: String,
    /// Telegram user ids allowed to talk to the bot; empty means anyone.
    #[serde(default)]
    pub allowed_users: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Sheets {
    pub spreadsheet_id: String,
    pub token: String,
    #[serde(default = "default_tab")]
    pub tab: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub telegram: Telegram,
    pub sheets: Sheets,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(
                Environment::with_prefix("KHATA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }
}
