//! Formatted terminal output.
//!
//! We keep formatting code in one place so the pipeline stays free of
//! presentation concerns and output changes are localized.

use crate::domain::RunReport;
use crate::io::Destination;

/// How many ids to echo before eliding the rest.
const MAX_LISTED_IDS: usize = 10;

/// Format the summary printed after a finalized journeys run.
pub fn format_run_summary<D: Destination + ?Sized>(report: &RunReport, destination: &D) -> String {
    let mut out = String::new();

    out.push_str("=== dsgen - journeys ===\n");
    out.push_str(&format!("Destination: {}\n", destination.describe()));
    out.push_str(&format!("Purged: {} file(s)\n", report.purged));
    out.push_str(&format!("Artifacts: {}\n", report.ids.len()));
    out.push_str(&format!("Manifest: {}\n", report.manifest_name));

    if !report.ids.is_empty() {
        let shown: Vec<&str> = report.ids.iter().take(MAX_LISTED_IDS).map(String::as_str).collect();
        out.push_str(&format!("Ids: {}", shown.join(", ")));
        let hidden = report.ids.len().saturating_sub(MAX_LISTED_IDS);
        if hidden > 0 {
            out.push_str(&format!(" (+{hidden} more)"));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FsDestination;

    #[test]
    fn summary_lists_counts_and_elides_long_id_lists() {
        let report = RunReport {
            ids: (0..12).map(|i| format!("j{i}")).collect(),
            purged: 3,
            manifest_name: "journeysList.json".to_string(),
        };
        let summary = format_run_summary(&report, &FsDestination::new("datastore"));

        assert!(summary.contains("Destination: datastore\n"));
        assert!(summary.contains("Purged: 3 file(s)\n"));
        assert!(summary.contains("Artifacts: 12\n"));
        assert!(summary.contains("Ids: j0, j1, j2, j3, j4, j5, j6, j7, j8, j9 (+2 more)\n"));
    }

    #[test]
    fn empty_run_has_no_id_line() {
        let report = RunReport {
            ids: Vec::new(),
            purged: 0,
            manifest_name: "journeysList.json".to_string(),
        };
        let summary = format_run_summary(&report, &FsDestination::new("out"));
        assert!(!summary.contains("Ids:"));
    }
}
