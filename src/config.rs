use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::MarkerPath;
use crate::core::key::KeyScheme;

pub const CONFIG_FILE_NAME: &str = ".lingotrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Dotted path of the translation-marker function.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Index of the message argument in marker calls; negative values
    /// count from the end of the argument list.
    #[serde(default)]
    pub key_argument_index: isize,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub key_scheme: KeyScheme,
    /// Namespace prefix for derived keys (slug scheme only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

fn default_marker() -> String {
    "i18n.translateMessage".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_messages_root() -> String {
    "./locales".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            key_argument_index: 0,
            default_locale: default_locale(),
            source_root: default_source_root(),
            messages_root: default_messages_root(),
            ignores: Vec::new(),
            key_scheme: KeyScheme::default(),
            namespace: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the marker is not a valid dotted path or any
    /// glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        MarkerPath::parse(&self.marker)?;

        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the config file found from `start_dir` upward, or defaults.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
