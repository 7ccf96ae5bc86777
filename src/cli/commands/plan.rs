//! Show the command plan without executing it
//!
//! Exposes the planner's pure operation directly: reads the staging area,
//! builds the plan, and prints each command line.

use anyhow::Result;

use crate::cli::Output;
use crate::hooks::HookContext;
use crate::planner::Planner;

/// Execute the plan command
pub async fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    let context = HookContext::load(config_path)?;
    let staged_files = context.repo.get_staged_files()?;
    let root = context.repo.work_dir()?.to_path_buf();

    let planner = Planner::new(context.settings, root)?;
    let plan = planner.plan(&staged_files);

    if plan.is_empty() {
        output.info("Nothing to run - no staged files match any bucket");
        return Ok(());
    }

    output.step(&format!(
        "Command plan ({} staged files):",
        staged_files.len()
    ));
    for command in &plan {
        output.list_item(&command.shell_line());
    }
    Ok(())
}
