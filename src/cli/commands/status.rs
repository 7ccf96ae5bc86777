//! Show repository, hook, and tool status

use anyhow::Result;
use std::fs;

use super::install::HOOK_MARKER;
use crate::cli::Output;
use crate::config::StagecheckConfig;
use crate::git::GitRepo;

/// Execute the status command
pub async fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("Stagecheck Status");

    let repo = match GitRepo::discover() {
        Ok(repo) => repo,
        Err(_) => {
            output.status_indicator("REPO", "not inside a git repository", false);
            return Ok(());
        }
    };

    output.key_value("Repository:", &repo.work_dir()?.display().to_string());
    if let Ok(branch) = repo.current_branch() {
        output.key_value("Branch:", &branch);
    }

    let hook_path = repo.hooks_dir().join("pre-commit");
    let hook_state = if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if existing.contains(HOOK_MARKER) {
            "installed"
        } else {
            "foreign hook present"
        }
    } else {
        "not installed"
    };
    output.status_indicator("HOOK", hook_state, hook_state == "installed");

    let config = StagecheckConfig::load_with_custom_config(config_path)?;
    let settings = config.settings()?;

    output.header("Tools");
    for (name, command) in [
        ("rust_format", &settings.tools.rust_format),
        ("rust_check", &settings.tools.rust_check),
        ("formatter", &settings.tools.formatter),
        ("type_check", &settings.tools.type_check),
        ("lint", &settings.tools.lint),
    ] {
        let Some(program) = command.split_whitespace().next() else {
            output.key_value(name, "(disabled)");
            continue;
        };
        let available = which::which(program).is_ok();
        output.status_indicator(
            if available { "OK" } else { "MISSING" },
            &format!("{name}: {command}"),
            available,
        );
    }

    Ok(())
}
