//! Pre-commit hook implementation
//!
//! Reads the staged-file list, builds the command plan, and executes it
//! sequentially in the repository root. The first failing command aborts
//! the remainder of the plan and the triggering commit.

use anyhow::Result;

use super::HookContext;
use crate::cli::Output;
use crate::external::CommandRunner;
use crate::planner::Planner;

/// Execute the pre-commit hook
pub async fn execute(context: HookContext, output: &Output) -> Result<()> {
    let staged_files = context.repo.get_staged_files()?;

    if staged_files.is_empty() {
        output.info("No staged files to check");
        return Ok(());
    }

    let root = context.repo.work_dir()?.to_path_buf();
    let planner = Planner::new(context.settings, &root)?;
    let plan = planner.plan(&staged_files);

    if plan.is_empty() {
        output.info("No staged files match any bucket - nothing to check");
        return Ok(());
    }

    output.verbose(&format!(
        "{} staged files, {} commands planned",
        staged_files.len(),
        plan.len()
    ));

    let runner = CommandRunner::new(root, output);
    runner.run_all(&plan)?;

    output.success("All pre-commit checks passed");
    Ok(())
}
