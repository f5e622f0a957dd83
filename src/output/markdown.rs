//! Markdown rendering of a time report.

use crate::aggregator::{TimeLedger, TimeReport};

const TABLE_HEADER: &str = "| User | Time Spent |\n|-----|---|\n";

/// Render the full report: per-sprint breakdown, then overall breakdown
///
/// Sprints with no entries are omitted from the per-sprint section.
pub fn render_report(report: &TimeReport) -> String {
    let mut out = String::new();
    out.push_str("# Break down for time spent per person\n");
    out.push_str(&render_per_sprint(report));
    out.push_str(&render_overall(&report.overall));
    out
}

/// Render the per-sprint section
pub fn render_per_sprint(report: &TimeReport) -> String {
    let mut out = String::from("## Per Sprint Breakdown\n");
    for sprint in report.non_empty_sprints() {
        out.push_str(&format!("### {}\n", sprint.sprint.title));
        out.push_str(&render_table(&sprint.totals));
    }
    out
}

/// Render the overall section
pub fn render_overall(overall: &TimeLedger) -> String {
    let mut out = String::from("## Overall Breakdown\n");
    out.push_str(&render_table(overall));
    out
}

/// Two-column contributor/duration table
fn render_table(ledger: &TimeLedger) -> String {
    let mut out = String::from(TABLE_HEADER);
    for (contributor, minutes) in ledger.iter() {
        out.push_str(&format!(
            "|{}|{}|\n",
            escape_cell(contributor.as_str()),
            format_duration(minutes)
        ));
    }
    out
}

/// Escape pipes so a name cannot split its table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Format minutes as `H:MM hours`
///
/// Hours are not folded into days: 1590 minutes is "26:30 hours".
pub fn format_duration(minutes: u64) -> String {
    format!("{}:{:02} hours", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Sprint;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00 hours");
        assert_eq!(format_duration(90), "1:30 hours");
        assert_eq!(format_duration(605), "10:05 hours");
        assert_eq!(format_duration(1590), "26:30 hours");
    }

    #[test]
    fn test_render_skips_empty_sprints() {
        let mut report = TimeReport::new();
        let mut totals = TimeLedger::new();
        totals.add("John Smith".into(), 90);
        report.push_sprint(Sprint::new("Sprint 1", None, None), TimeLedger::new());
        report.push_sprint(Sprint::new("Sprint 2", None, None), totals);

        let rendered = render_report(&report);
        assert!(!rendered.contains("### Sprint 1"));
        assert!(rendered.contains("### Sprint 2\n| User | Time Spent |\n|-----|---|\n|John Smith|1:30 hours|\n"));
        assert!(rendered.ends_with("## Overall Breakdown\n| User | Time Spent |\n|-----|---|\n|John Smith|1:30 hours|\n"));
    }

    #[test]
    fn test_pipe_in_name_is_escaped() {
        let mut overall = TimeLedger::new();
        overall.add("Ann | Ops".into(), 30);

        let rendered = render_overall(&overall);
        assert!(rendered.ends_with("|Ann \\| Ops|0:30 hours|\n"));
        assert_eq!(escape_cell("a|b|c"), "a\\|b\\|c");
    }

    #[test]
    fn test_render_empty_report() {
        let rendered = render_report(&TimeReport::new());
        assert_eq!(
            rendered,
            "# Break down for time spent per person\n\
             ## Per Sprint Breakdown\n\
             ## Overall Breakdown\n\
             | User | Time Spent |\n\
             |-----|---|\n"
        );
    }
}
