use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::InitCommand,
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK},
};
use super::helper::project_root;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = project_root(cmd.root.as_ref())?.join(CONFIG_FILE_NAME);

    if config_path.exists() && !cmd.force {
        eprintln!(
            "{} {} already exists (use {} to overwrite)",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME,
            "--force".cyan()
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
