//! `git` command runner.

use super::VersionControl;
use crate::error::PlaygenError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Captured output of a successful git command.
#[derive(Debug, Clone)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run `git <args>` in `cwd`.
///
/// A non-zero exit becomes [`PlaygenError::GitError`] carrying stderr (or
/// stdout when stderr is empty, as `git commit` reports "nothing to commit"
/// there).
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput, PlaygenError> {
    let cwd = cwd.as_ref();
    let subcommand = args.first().copied().unwrap_or("");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            PlaygenError::GitError(format!("failed to execute git {}: {}", subcommand, e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let message = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };
        Err(PlaygenError::GitError(format!(
            "git {} failed (exit code {}): {}",
            subcommand, exit_code, message
        )))
    }
}

/// Repository driven through the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
    remote: String,
    branch: String,
}

impl GitCli {
    pub fn new(
        repo_root: impl Into<PathBuf>,
        remote: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    // Paths under the repository are passed relative to it.
    fn pathspec(&self, path: &Path) -> String {
        path.strip_prefix(&self.repo_root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

impl VersionControl for GitCli {
    fn stage(&self, paths: &[PathBuf]) -> Result<(), PlaygenError> {
        if paths.is_empty() {
            return Ok(());
        }
        let specs: Vec<String> = paths.iter().map(|p| self.pathspec(p)).collect();
        let mut args = vec!["add", "--"];
        args.extend(specs.iter().map(String::as_str));
        run_git(&self.repo_root, &args)?;
        debug!(files = specs.len(), "Staged files");
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), PlaygenError> {
        run_git(&self.repo_root, &["commit", "-m", message])?;
        debug!(message, "Created commit");
        Ok(())
    }

    fn push(&self) -> Result<(), PlaygenError> {
        run_git(&self.repo_root, &["push", &self.remote, &self.branch])?;
        debug!(remote = %self.remote, branch = %self.branch, "Pushed");
        Ok(())
    }
}
