//! Command dispatch.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{convert::convert, extract::extract, merge::run_merge};
use super::exit_status::ExitStatus;
use super::report::success;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Merge(cmd)) => run_merge(cmd),
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Init) => {
            init()?;
            success(&format!("Created {}", CONFIG_FILE_NAME));
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
