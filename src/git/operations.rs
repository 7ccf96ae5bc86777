use anyhow::{Context, Result};
use std::process::Command;

use super::GitRepo;

impl GitRepo {
    /// Get the list of files staged for commit, as reported by git:
    /// paths relative to the repository root, one per line.
    pub fn get_staged_files(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["diff", "--cached", "--name-only"])
            .current_dir(self.work_dir()?)
            .output()
            .context("Failed to execute git diff --cached --name-only")?;

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "Git command failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        let stdout =
            String::from_utf8(output.stdout).context("Git output is not valid UTF-8")?;

        let files = stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim().to_string())
            .collect();

        Ok(files)
    }
}
