//! Batches of modified lessons and the commit/push step that flushes them.

use super::VersionControl;
use std::path::PathBuf;
use tracing::{info, warn};

/// Files modified since the last flush within one section.
#[derive(Debug, Clone)]
pub struct Batch {
    files: Vec<PathBuf>,
    number: usize,
    capacity: usize,
}

impl Batch {
    /// Empty batch numbered 1. A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            files: Vec::new(),
            number: 1,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    pub fn is_full(&self) -> bool {
        self.files.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Drain the files and advance to the next batch number.
    fn take(&mut self) -> Vec<PathBuf> {
        self.number += 1;
        std::mem::take(&mut self.files)
    }
}

/// Result of flushing one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushOutcome {
    pub files: usize,
    pub committed: bool,
    pub pushed: bool,
}

/// Commits and pushes batches. Failures are logged, never raised.
pub struct BatchCommitter<'a> {
    vcs: &'a dyn VersionControl,
    commit_prefix: String,
}

impl<'a> BatchCommitter<'a> {
    pub fn new(vcs: &'a dyn VersionControl, commit_prefix: impl Into<String>) -> Self {
        Self {
            vcs,
            commit_prefix: commit_prefix.into(),
        }
    }

    pub fn commit_message(&self, section: &str, number: usize, count: usize) -> String {
        format!(
            "{} - {} batch {} ({} lessons)",
            self.commit_prefix, section, number, count
        )
    }

    /// Stage and commit the batch, pushing only after a successful commit.
    /// An empty batch is a no-op.
    pub fn flush(&self, batch: &mut Batch, section: &str) -> FlushOutcome {
        if batch.is_empty() {
            return FlushOutcome::default();
        }

        let number = batch.number();
        let files = batch.take();
        let message = self.commit_message(section, number, files.len());
        let mut outcome = FlushOutcome {
            files: files.len(),
            ..FlushOutcome::default()
        };

        let committed = self
            .vcs
            .stage(&files)
            .and_then(|()| self.vcs.commit(&message));
        match committed {
            Ok(()) => {
                outcome.committed = true;
                info!(section, batch = number, files = files.len(), "Committed batch");
            }
            Err(e) => {
                warn!(section, batch = number, "Commit failed: {}", e);
                return outcome;
            }
        }

        match self.vcs.push() {
            Ok(()) => {
                outcome.pushed = true;
                info!(section, batch = number, "Pushed batch");
            }
            Err(e) => warn!(section, batch = number, "Push failed: {}", e),
        }

        outcome
    }

    /// Push outside of a batch flush. Returns whether the push succeeded.
    pub fn push(&self) -> bool {
        match self.vcs.push() {
            Ok(()) => true,
            Err(e) => {
                warn!("Final push failed: {}", e);
                false
            }
        }
    }
}
