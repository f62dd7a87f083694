//! Shared command setup: config discovery plus CLI overrides.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};

/// Resolved settings a command runs with.
///
/// The config file is discovered upward from the invocation directory;
/// individual CLI flags override its values. Everything downstream receives
/// explicit paths from here, never ambient process state.
pub struct RunContext {
    pub config: Config,
    pub source_root: PathBuf,
    pub messages_root: PathBuf,
    pub default_locale: String,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let invocation_dir =
            std::env::current_dir().context("Failed to resolve current directory")?;
        let config = load_config(&invocation_dir)?;

        let source_root = common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source_root));
        let messages_root = common
            .messages_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.messages_root));
        let default_locale = common
            .default_locale
            .clone()
            .unwrap_or_else(|| config.default_locale.clone());

        Ok(Self {
            config,
            source_root,
            messages_root,
            default_locale,
            verbose: common.verbose,
        })
    }

    /// Path of a locale's catalog file under the messages root.
    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.messages_root.join(format!("{}.json", locale))
    }
}
