//! Colored status lines printed after a replay
//!
//! Status goes to stderr; stdout is reserved for the report itself.

use colored::{ColoredString, Colorize};
use stacksift_collector::ReplaySummary;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
}

impl Status {
    fn marker(self) -> ColoredString {
        match self {
            Status::Success => "✓".green(),
            Status::Info => "ℹ".blue(),
            Status::Warning => "⚠".yellow(),
        }
    }
}

/// Status lines describing a finished replay
pub fn replay_status(
    summary: &ReplaySummary,
    filtering: bool,
    report: Option<&Path>,
) -> Vec<(Status, String)> {
    let mut lines = Vec::new();

    if !filtering {
        lines.push((Status::Info, "No stack filter set, all samples kept".to_string()));
    }
    lines.push((
        Status::Success,
        format!(
            "{} samples kept, {} filtered, {} unique stacks",
            summary.kept, summary.filtered, summary.unique_stacks
        ),
    ));
    if summary.kept == 0 && summary.filtered > 0 {
        lines.push((Status::Warning, "No stack matched the filter".to_string()));
    }
    if let Some(path) = report {
        lines.push((Status::Info, format!("Report written to {}", path.display())));
    }

    lines
}

pub fn print_status(lines: &[(Status, String)]) {
    for (status, msg) in lines {
        eprintln!("{} {}", status.marker(), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(kept: u64, filtered: u64, unique_stacks: usize) -> ReplaySummary {
        ReplaySummary {
            kept,
            filtered,
            unique_stacks,
        }
    }

    #[test]
    fn test_status_without_filter() {
        let lines = replay_status(&summary(6, 0, 4), false, None);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Status::Info);
        assert_eq!(
            lines[1],
            (
                Status::Success,
                "6 samples kept, 0 filtered, 4 unique stacks".to_string()
            )
        );
    }

    #[test]
    fn test_status_warns_when_nothing_matched() {
        let lines = replay_status(&summary(0, 5, 0), true, Some(Path::new("out.folded")));
        let statuses: Vec<Status> = lines.iter().map(|(status, _)| *status).collect();
        assert_eq!(statuses, vec![Status::Success, Status::Warning, Status::Info]);
        assert!(lines[2].1.ends_with("out.folded"));
    }
}
