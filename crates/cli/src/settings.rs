//! Handles settings for the command line. Configuration is written in
//! `tally.toml`; every section is optional and falls back to defaults.
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log filter level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Books {
    /// Path of the ledger data file.
    pub path: String,
}

impl Default for Books {
    fn default() -> Self {
        Self {
            path: "books.txt".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub books: Books,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("tally").required(false))
            .build()?;

        settings.try_deserialize()
    }
}
