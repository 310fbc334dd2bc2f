//! Completion notification sink.

use crate::error::PlaygenError;
use std::process::Command;
use tracing::debug;

/// Placeholder in the notification command replaced by the message text.
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Receives the end-of-run message.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), PlaygenError>;
}

/// Runs an external command, substituting [`MESSAGE_PLACEHOLDER`] in its arguments.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: Vec<String>,
}

impl CommandNotifier {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// Program and arguments with the message substituted.
    pub fn render(&self, message: &str) -> Vec<String> {
        self.command
            .iter()
            .map(|arg| arg.replace(MESSAGE_PLACEHOLDER, message))
            .collect()
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, message: &str) -> Result<(), PlaygenError> {
        let argv = self.render(message);
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| PlaygenError::NotificationFailed("empty command".to_string()))?;

        let output = Command::new(program).args(args).output().map_err(|e| {
            PlaygenError::NotificationFailed(format!("failed to execute {}: {}", program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlaygenError::NotificationFailed(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        debug!(program = %program, "Notification sent");
        Ok(())
    }
}

/// Notifier used when notifications are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, message: &str) -> Result<(), PlaygenError> {
        debug!(message, "Notifications disabled");
        Ok(())
    }
}
