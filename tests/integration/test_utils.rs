//! Shared test utilities for integration tests
//!
//! Scripted generation client, recording clock and temporary git repositories.

use async_trait::async_trait;
use playgen::error::PlaygenError;
use playgen::generation::Clock;
use playgen::provider::{GenerationClient, GenerationOptions, GenerationResponse, TokenUsage};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

pub const VALID_BLOCK: &str = "## Interactive Example\n\n<Sandpack\n  template=\"vanilla\"\n  files={{\n    \"/index.html\": `<button>Run</button>`\n  }}\n/>";

/// Generation client replaying scripted replies, then a fallback.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, PlaygenError>>>,
    fallback: Option<String>,
    calls: Mutex<usize>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String, PlaygenError>>, fallback: Option<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback: fallback.map(str::to_string),
            calls: Mutex::new(0),
        }
    }

    pub fn always(text: &str) -> Self {
        Self::new(Vec::new(), Some(text))
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<GenerationResponse, PlaygenError> {
        *self.calls.lock().unwrap() += 1;
        let scripted = self.replies.lock().unwrap().pop_front();
        let text = match (scripted, &self.fallback) {
            (Some(reply), _) => reply?,
            (None, Some(text)) => text.clone(),
            (None, None) => {
                return Err(PlaygenError::ProviderError("script exhausted".to_string()))
            }
        };
        Ok(GenerationResponse {
            text,
            model: "scripted".to_string(),
            usage: TokenUsage::default(),
            finish_reason: Some("STOP".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Clock that records delays instead of sleeping.
#[derive(Default)]
pub struct RecordingClock {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Working repository on `main` with one commit, plus a bare `origin`.
pub struct TestRepo {
    pub work: TempDir,
    pub remote: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let work = TempDir::new().unwrap();
        let remote = TempDir::new().unwrap();
        let path = work.path();

        git(remote.path(), &["init", "--bare"]);
        git(path, &["init"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "user.name", "Test User"]);
        fs::write(path.join("README.md"), "# Site\n").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", "Initial commit"]);
        let remote_path = remote.path().to_string_lossy().to_string();
        git(path, &["remote", "add", "origin", &remote_path]);
        git(path, &["push", "origin", "main"]);

        Self { work, remote }
    }

    pub fn root(&self) -> &Path {
        self.work.path()
    }

    pub fn pages(&self) -> PathBuf {
        self.root().join("pages")
    }

    /// Commit a lesson so later runs only show generated changes.
    pub fn add_lesson(&self, section: &str, name: &str, content: &str) -> PathBuf {
        let path = write_lesson(&self.pages(), section, name, content);
        git(self.root(), &["add", "."]);
        git(self.root(), &["commit", "-m", &format!("add {}", name)]);
        git(self.root(), &["push", "origin", "main"]);
        path
    }

    /// Commit subjects on the remote's `main`, newest first.
    pub fn remote_subjects(&self) -> Vec<String> {
        git(self.remote.path(), &["log", "--format=%s", "main"])
            .lines()
            .map(str::to_string)
            .collect()
    }
}

pub fn write_lesson(pages: &Path, section: &str, name: &str, content: &str) -> PathBuf {
    let dir = pages.join(section);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
