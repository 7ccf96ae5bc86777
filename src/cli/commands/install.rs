//! Install the pre-commit hook script
//!
//! Writes a small shim into `.git/hooks/pre-commit` that delegates to
//! `stagecheck run pre-commit`. A hook not managed by stagecheck is only
//! overwritten with `--force`.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::Output;
use crate::git::GitRepo;

/// Marker line identifying a stagecheck-managed hook script
pub const HOOK_MARKER: &str = "# Installed by stagecheck";

const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# Installed by stagecheck - run `stagecheck uninstall` to remove\n\
exec stagecheck run pre-commit \"$@\"\n";

/// Execute the install command
pub async fn execute(force: bool, output: &Output) -> Result<()> {
    let repo = GitRepo::discover()?;
    let hooks_dir = repo.hooks_dir();
    let hook_path = hooks_dir.join("pre-commit");

    if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if existing.contains(HOOK_MARKER) {
            output.info("Pre-commit hook is already installed");
            return Ok(());
        }
        if !force {
            anyhow::bail!(
                "a pre-commit hook not managed by stagecheck already exists at {}; \
                 re-run with --force to overwrite it",
                hook_path.display()
            );
        }
        output.warning("Overwriting existing pre-commit hook (--force)");
    }

    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("failed to create {}", hooks_dir.display()))?;
    fs::write(&hook_path, HOOK_SCRIPT)
        .with_context(|| format!("failed to write {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&hook_path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to make {} executable", hook_path.display()))?;
    }

    output.success(&format!(
        "Installed pre-commit hook at {}",
        hook_path.display()
    ));
    Ok(())
}
