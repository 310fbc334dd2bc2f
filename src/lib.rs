//! playgen: Sandpack playground generator for lesson pages
//!
//! Scans lesson sections for pages without an interactive example, asks a
//! generation service for a Sandpack block per lesson, appends the validated
//! block to the page, and commits the modified pages to git in batches.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod generation;
pub mod lesson;
pub mod logging;
pub mod notify;
pub mod prompt;
pub mod provider;
pub mod section;
pub mod variant;
pub mod vcs;
