//! Lesson store scanner: finds the lessons of a section that still need a playground.

use super::LessonDocument;
use crate::error::PlaygenError;
use crate::section::Section;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Result of scanning one section directory.
#[derive(Debug, Clone, Default)]
pub struct SectionScan {
    /// Lesson files found (extension matched, not underscore-prefixed).
    pub total_files: usize,
    /// Lessons without a playground marker, ordered by file name.
    pub pending: Vec<LessonDocument>,
    /// False when the section directory does not exist.
    pub directory_found: bool,
}

/// Scan `<pages_root>/<section>` for lessons lacking a playground.
///
/// Only direct children with the given extension are considered; files
/// whose name starts with `_` are layout/meta files and are skipped. A
/// missing directory is reported with a warning and an empty scan.
pub fn scan_section(
    pages_root: &Path,
    section: &Section,
    extension: &str,
) -> Result<SectionScan, PlaygenError> {
    let section_dir = pages_root.join(&section.name);
    if !section_dir.is_dir() {
        warn!(
            section = %section.name,
            path = %section_dir.display(),
            "Section directory does not exist, skipping"
        );
        return Ok(SectionScan::default());
    }

    let extension = extension.trim_start_matches('.');
    let walker = WalkDir::new(&section_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut scan = SectionScan {
        directory_found: true,
        ..SectionScan::default()
    };

    for entry in walker {
        let entry = entry.map_err(|e| {
            PlaygenError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to list {}: {}", section_dir.display(), e),
            ))
        })?;

        // Symlinked lessons count; broken links and directories do not.
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name.starts_with('_') {
            continue;
        }
        let matches_extension = entry
            .path()
            .extension()
            .map(|ext| ext == extension)
            .unwrap_or(false);
        if !matches_extension {
            continue;
        }

        scan.total_files += 1;

        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    section = %section.name,
                    lesson = %file_name,
                    "Failed to read lesson, skipping: {}",
                    e
                );
                continue;
            }
        };

        let document = LessonDocument {
            section: section.name.clone(),
            file_name,
            path: entry.path().to_path_buf(),
            content,
        };

        if document.has_playground() {
            debug!(section = %section.name, lesson = %document.file_name, "Already has playground");
            continue;
        }
        scan.pending.push(document);
    }

    Ok(scan)
}
