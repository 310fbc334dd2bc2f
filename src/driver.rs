//! Section driver: walks the sections in order and runs the per-lesson pipeline.
//!
//! For every processed section the driver scans for pending lessons, applies
//! the limit, generates and appends a playground per lesson, and flushes the
//! modified files to version control in fixed-size batches. Run state is
//! owned by [`SectionDriver::run`] and returned as a [`RunSummary`].

use crate::generation::{Clock, GenerationRequest, PlaygroundGenerator};
use crate::lesson::{append_block, scan_section};
use crate::notify::Notifier;
use crate::section::{default_sections, Section, TemplateKind};
use crate::variant::Variant;
use crate::vcs::{Batch, BatchCommitter};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Default number of modified lessons per commit.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Where lessons live and how the run is paced.
#[derive(Debug, Clone)]
pub struct DriverSettings {
    pub pages_root: PathBuf,
    pub extension: String,
    pub sections: Vec<Section>,
    pub batch_size: usize,
    pub request_delay: Duration,
    pub batch_delay: Duration,
    pub variant: Variant,
}

impl DriverSettings {
    /// Default section table, `.mdx` lessons and the variant's pacing.
    pub fn for_variant(pages_root: impl Into<PathBuf>, variant: Variant) -> Self {
        let profile = variant.profile();
        Self {
            pages_root: pages_root.into(),
            extension: "mdx".to_string(),
            sections: default_sections(),
            batch_size: DEFAULT_BATCH_SIZE,
            request_delay: profile.request_delay,
            batch_delay: profile.batch_delay,
            variant,
        }
    }
}

/// Command-line selection for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Resume from this section; earlier sections are skipped.
    pub start_section: Option<String>,
    /// Cap on pending lessons processed per section.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    /// Before the resume point.
    Skipped,
    /// Section directory does not exist.
    Missing,
    /// Section directory could not be listed.
    Unreadable,
    Processed,
}

impl SectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::Skipped => "skipped",
            SectionStatus::Missing => "missing",
            SectionStatus::Unreadable => "unreadable",
            SectionStatus::Processed => "processed",
        }
    }
}

/// Outcome of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub name: String,
    pub template: TemplateKind,
    pub status: SectionStatus,
    pub total_files: usize,
    pub pending: usize,
    pub added: usize,
    pub failed: usize,
    pub commits: usize,
    pub pushes: usize,
}

impl SectionReport {
    fn new(section: &Section, status: SectionStatus) -> Self {
        Self {
            name: section.name.clone(),
            template: section.template,
            status,
            total_files: 0,
            pending: 0,
            added: 0,
            failed: 0,
            commits: 0,
            pushes: 0,
        }
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sections: Vec<SectionReport>,
    pub total_added: usize,
    pub final_push: bool,
    pub notified: bool,
}

impl RunSummary {
    pub fn total_failed(&self) -> usize {
        self.sections.iter().map(|s| s.failed).sum()
    }

    pub fn total_commits(&self) -> usize {
        self.sections.iter().map(|s| s.commits).sum()
    }
}

/// Drives the generate/append/commit pipeline over all sections.
pub struct SectionDriver<'a> {
    settings: DriverSettings,
    generator: PlaygroundGenerator<'a>,
    committer: BatchCommitter<'a>,
    notifier: &'a dyn Notifier,
    clock: &'a dyn Clock,
}

impl<'a> SectionDriver<'a> {
    pub fn new(
        settings: DriverSettings,
        generator: PlaygroundGenerator<'a>,
        committer: BatchCommitter<'a>,
        notifier: &'a dyn Notifier,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            settings,
            generator,
            committer,
            notifier,
            clock,
        }
    }

    /// Process every selected section, push, and send the completion notification.
    pub async fn run(&self, options: &RunOptions) -> RunSummary {
        let sections = &self.settings.sections;

        if let Some(start) = options.start_section.as_deref() {
            if !sections.iter().any(|s| s.name == start) {
                warn!(
                    section = start,
                    "Resume section is not configured, nothing will be processed"
                );
            }
        }

        let mut started = options.start_section.is_none();
        let mut reports = Vec::with_capacity(sections.len());

        for section in sections {
            if options.start_section.as_deref() == Some(section.name.as_str()) {
                started = true;
            }
            if !started {
                info!(section = %section.name, "Skipping section before resume point");
                reports.push(SectionReport::new(section, SectionStatus::Skipped));
                continue;
            }
            reports.push(self.process_section(section, options.limit).await);
        }

        let total_added: usize = reports.iter().map(|r| r.added).sum();
        info!(total_added, "Generation finished");

        let final_push = self.committer.push();

        let message = self.settings.variant.completion_message(
            total_added,
            sections.len(),
            self.generator.model_name(),
        );
        let notified = match self.notifier.notify(&message) {
            Ok(()) => true,
            Err(e) => {
                warn!("Completion notification failed: {}", e);
                false
            }
        };

        RunSummary {
            sections: reports,
            total_added,
            final_push,
            notified,
        }
    }

    async fn process_section(&self, section: &Section, limit: Option<usize>) -> SectionReport {
        let scanned = scan_section(&self.settings.pages_root, section, &self.settings.extension);
        let scan = match scanned {
            Ok(scan) => scan,
            Err(e) => {
                warn!(section = %section.name, "Failed to scan section: {}", e);
                return SectionReport::new(section, SectionStatus::Unreadable);
            }
        };
        if !scan.directory_found {
            return SectionReport::new(section, SectionStatus::Missing);
        }

        let mut pending = scan.pending;
        if let Some(limit) = limit {
            pending.truncate(limit);
        }

        let mut report = SectionReport::new(section, SectionStatus::Processed);
        report.total_files = scan.total_files;
        report.pending = pending.len();

        info!(
            section = %section.name,
            template = %section.template,
            total = scan.total_files,
            pending = pending.len(),
            "Processing section"
        );
        if pending.is_empty() {
            info!(section = %section.name, "All lessons already have playgrounds");
            return report;
        }

        let mut batch = Batch::new(self.settings.batch_size);
        let count = pending.len();

        for (index, document) in pending.iter().enumerate() {
            let lesson = document.lesson_name();
            info!(section = %section.name, lesson, "[{}/{}] Generating", index + 1, count);

            let request = GenerationRequest { document, section };
            match self.generator.generate(request).await {
                Some(block) => match append_block(&document.path, &block) {
                    Ok(()) => {
                        batch.push(document.path.clone());
                        report.added += 1;
                        info!(section = %section.name, lesson, "Playground added");
                    }
                    Err(e) => {
                        report.failed += 1;
                        warn!(section = %section.name, lesson, "Failed to append playground: {}", e);
                    }
                },
                None => {
                    report.failed += 1;
                    warn!(section = %section.name, lesson, "Lesson skipped");
                }
            }

            if batch.is_full() {
                self.flush(&mut batch, &mut report);
                self.clock.sleep(self.settings.batch_delay).await;
            }
            self.clock.sleep(self.settings.request_delay).await;
        }

        self.flush(&mut batch, &mut report);
        report
    }

    fn flush(&self, batch: &mut Batch, report: &mut SectionReport) {
        let outcome = self.committer.flush(batch, &report.name);
        report.commits += usize::from(outcome.committed);
        report.pushes += usize::from(outcome.pushed);
    }
}
