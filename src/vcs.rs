//! Version control: staging, committing and pushing generated lessons.
//!
//! The driver talks to [`VersionControl`]; [`GitCli`] shells out to `git` and
//! tests substitute a recording implementation.

use crate::error::PlaygenError;
use std::path::PathBuf;

pub mod batch;
pub mod git;

pub use batch::{Batch, BatchCommitter, FlushOutcome};
pub use git::{run_git, GitCli, GitOutput};

/// Operations the batch committer needs from a repository.
pub trait VersionControl: Send + Sync {
    /// Stage the given files.
    fn stage(&self, paths: &[PathBuf]) -> Result<(), PlaygenError>;

    /// Commit whatever is staged.
    fn commit(&self, message: &str) -> Result<(), PlaygenError>;

    /// Push the configured branch to the configured remote.
    fn push(&self) -> Result<(), PlaygenError>;
}
