//! Current branch lookup.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

/// Source of the current branch name.
pub trait BranchProvider {
    /// Returns the current branch name, without trailing whitespace.
    fn current_branch(&self) -> Result<String>;
}

/// Asks the `git` binary for the checked-out branch.
#[derive(Debug, Clone, Default)]
pub struct GitBranchProvider {
    workdir: Option<PathBuf>,
}

impl GitBranchProvider {
    /// Uses the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs git inside `path` instead of the process working directory.
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            workdir: Some(path.as_ref().to_path_buf()),
        }
    }
}

impl BranchProvider for GitBranchProvider {
    fn current_branch(&self) -> Result<String> {
        let mut command = Command::new("git");
        command.args(["rev-parse", "--abbrev-ref", "HEAD"]);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .context("Failed to execute git rev-parse --abbrev-ref HEAD")?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to determine current branch: {}", error_msg.trim());
        }

        let branch = String::from_utf8(output.stdout)
            .context("Branch name is not valid UTF-8")?
            .trim()
            .to_string();

        debug!(branch = %branch, "Resolved current branch");
        Ok(branch)
    }
}

/// A branch name known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBranch(pub String);

impl BranchProvider for FixedBranch {
    fn current_branch(&self) -> Result<String> {
        Ok(self.0.trim().to_string())
    }
}
