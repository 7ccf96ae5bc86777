//! Git hook entry points
//!
//! Each supported hook gets its own module; `HookContext` carries the
//! resolved configuration and repository handle into the hook body.

pub mod pre_commit;

use anyhow::Result;

use crate::config::{PlanSettings, StagecheckConfig};
use crate::git::GitRepo;

/// Resolved state a hook executes against
pub struct HookContext {
    pub settings: PlanSettings,
    pub repo: GitRepo,
}

impl HookContext {
    /// Discover the repository and load the merged configuration
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let repo = GitRepo::discover()?;
        let config = StagecheckConfig::load_with_custom_config(custom_config)?;
        let settings = config.settings()?;
        Ok(Self { settings, repo })
    }
}
