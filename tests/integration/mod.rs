//! Integration tests for the playground generator

mod cli_binary;
mod config_loading;
mod gemini_client;
mod git_batches;
pub mod test_utils;
