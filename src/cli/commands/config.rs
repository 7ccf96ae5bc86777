//! Configuration command implementations

use anyhow::Result;

use crate::cli::{ConfigCommands, Output};
use crate::config::StagecheckConfig;
use crate::git::GitRepo;
use crate::planner::Planner;

/// Execute config commands
pub async fn execute(
    cmd: ConfigCommands,
    config_path: Option<&str>,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path).await,
        ConfigCommands::Validate => validate(config_path, output).await,
    }
}

async fn show(config_path: Option<&str>) -> Result<()> {
    let config = StagecheckConfig::load_with_custom_config(config_path)?;
    let full_config = config.get_full_config()?;
    println!("{}", serde_json::to_string_pretty(&full_config)?);
    Ok(())
}

async fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = StagecheckConfig::load_with_custom_config(config_path)?;
    let settings = config.settings()?;

    // Compiling the planner exercises every configured glob group
    let root = match GitRepo::discover() {
        Ok(repo) => repo.work_dir()?.to_path_buf(),
        Err(_) => std::env::current_dir()?,
    };
    Planner::new(settings, root)?;

    output.success("Configuration is valid");
    Ok(())
}
