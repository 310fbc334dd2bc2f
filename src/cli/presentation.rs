//! Run summary presentation.

use crate::driver::{RunSummary, SectionStatus};
use comfy_table::Table;

/// Render the end-of-run summary as a table plus a totals line.
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec![
        "Section", "Template", "Status", "Lessons", "Pending", "Added", "Failed", "Commits",
    ]);

    for report in &summary.sections {
        let counts = |n: usize| {
            if report.status == SectionStatus::Processed {
                n.to_string()
            } else {
                "-".to_string()
            }
        };
        table.add_row(vec![
            report.name.clone(),
            report.template.to_string(),
            report.status.as_str().to_string(),
            counts(report.total_files),
            counts(report.pending),
            counts(report.added),
            counts(report.failed),
            counts(report.commits),
        ]);
    }

    let mut out = table.to_string();
    out.push_str(&format!(
        "\nAdded {} playgrounds ({} failed, {} commits)",
        summary.total_added,
        summary.total_failed(),
        summary.total_commits()
    ));
    if !summary.final_push {
        out.push_str("\nWarning: final push failed; run `git push` manually");
    }
    if !summary.notified {
        out.push_str("\nWarning: completion notification failed");
    }
    out
}
