//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PlaygenError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &PlaygenError) -> String {
    match e {
        PlaygenError::MissingCredential(_) => format!("Error: {}", e),
        PlaygenError::ConfigError(_) => {
            format!("{}\nCheck config/playgen.toml or the file passed with --config.", e)
        }
        _ => e.to_string(),
    }
}
