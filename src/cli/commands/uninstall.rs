//! Remove the stagecheck-managed pre-commit hook

use anyhow::Result;
use std::fs;

use super::install::HOOK_MARKER;
use crate::cli::Output;
use crate::git::GitRepo;

/// Execute the uninstall command
pub async fn execute(output: &Output) -> Result<()> {
    let repo = GitRepo::discover()?;
    let hook_path = repo.hooks_dir().join("pre-commit");

    if !hook_path.exists() {
        output.info("No pre-commit hook installed");
        return Ok(());
    }

    let existing = fs::read_to_string(&hook_path).unwrap_or_default();
    if !existing.contains(HOOK_MARKER) {
        anyhow::bail!(
            "the pre-commit hook at {} is not managed by stagecheck; leaving it in place",
            hook_path.display()
        );
    }

    fs::remove_file(&hook_path)?;
    output.success("Removed pre-commit hook");
    Ok(())
}
