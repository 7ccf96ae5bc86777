pub mod operations;

use anyhow::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(GitRepo { repo })
    }

    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        let shorthand = head.shorthand().unwrap_or("HEAD");
        Ok(shorthand.to_string())
    }

    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Root of the working tree; fails for bare repositories
    pub fn work_dir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| anyhow::anyhow!("repository has no working tree (bare repository)"))
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }
}
