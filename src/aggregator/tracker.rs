//! Fold note events and attendance rows into per-sprint and overall totals.
//!
//! Retraction is resolved at discussion scope: within one discussion, a
//! "removed time spent" note zeroes the author's additions processed before
//! it, but not those after it. Issue, sprint and overall totals are plain
//! sums of already-resolved ledgers, so the overall view honors retraction
//! the same way the sprint view does.

use super::ledger::TimeLedger;
use super::sprint::{resolve_sprint_index, select_sprints, Sprint};
use crate::gitlab::{Discussion, Milestone, ProjectSource};
use crate::parser::{interpret_note, parse_attendance, AttendanceRow};
use crate::utils::config::TrackerConfig;
use crate::utils::error::GitLabError;
use log::{debug, info};

/// One sprint with the time recorded against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintTotals {
    pub sprint: Sprint,
    pub totals: TimeLedger,
}

/// Result of a full aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeReport {
    /// Sprints in milestone order, including empty ones
    pub sprints: Vec<SprintTotals>,
    /// Per-contributor totals across all sprints
    pub overall: TimeLedger,
}

impl TimeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sprint's totals and add them to the overall ledger
    pub fn push_sprint(&mut self, sprint: Sprint, totals: TimeLedger) {
        self.overall.merge(&totals);
        self.sprints.push(SprintTotals { sprint, totals });
    }

    /// Route attendance rows into the sprint active on their date
    ///
    /// Rows whose date falls in no sprint are skipped.
    /// Returns the number of rows applied.
    pub fn apply_attendance(&mut self, rows: &[AttendanceRow]) -> usize {
        let sprints: Vec<Sprint> = self.sprints.iter().map(|s| s.sprint.clone()).collect();
        let mut applied = 0;

        for row in rows {
            let Some(index) = resolve_sprint_index(&sprints, row.date) else {
                debug!("No sprint covers {}; skipping row for {}", row.date, row.contributor);
                continue;
            };

            self.sprints[index].totals.add(row.contributor.clone(), row.minutes);
            self.overall.add(row.contributor.clone(), row.minutes);
            applied += 1;
        }

        applied
    }

    /// Sprints that have at least one entry
    pub fn non_empty_sprints(&self) -> impl Iterator<Item = &SprintTotals> {
        self.sprints.iter().filter(|s| !s.totals.is_empty())
    }
}

/// Totals for one discussion thread, notes processed in order
pub fn aggregate_discussion(discussion: &Discussion) -> TimeLedger {
    let mut ledger = TimeLedger::new();
    for event in discussion.notes.iter().filter_map(interpret_note) {
        ledger.apply(event);
    }
    ledger
}

/// Totals for one issue: the sum of its discussions
pub fn aggregate_issue(discussions: &[Discussion]) -> TimeLedger {
    let mut ledger = TimeLedger::new();
    for discussion in discussions {
        ledger.merge(&aggregate_discussion(discussion));
    }
    ledger
}

/// Totals for one sprint: the sum of its milestone's issues
pub fn aggregate_sprint(
    source: &impl ProjectSource,
    milestone: &Milestone,
) -> Result<TimeLedger, GitLabError> {
    let issues = source.milestone_issues(milestone)?;
    debug!("Milestone '{}' has {} issues", milestone.title, issues.len());

    let mut ledger = TimeLedger::new();
    for issue in &issues {
        let discussions = source.issue_discussions(issue)?;
        ledger.merge(&aggregate_issue(&discussions));
    }
    Ok(ledger)
}

/// Run the whole aggregation against a project
///
/// Steps:
/// 1. Fetch milestones and keep those matching the sprint filter
/// 2. Aggregate each sprint's issue discussions
/// 3. If a lab time wiki page is configured, merge its attendance rows
pub fn build_report(
    source: &impl ProjectSource,
    config: &TrackerConfig,
) -> Result<TimeReport, GitLabError> {
    let milestones = select_sprints(source.milestones()?, &config.project.sprint_filter);
    info!("Aggregating {} sprints", milestones.len());

    let mut report = TimeReport::new();
    for milestone in &milestones {
        let totals = aggregate_sprint(source, milestone)?;
        info!(
            "Sprint '{}': {} contributors, {} minutes",
            milestone.title,
            totals.len(),
            totals.total_minutes()
        );
        report.push_sprint(Sprint::from(milestone), totals);
    }

    if let Some(slug) = &config.project.lab_time_wiki_slug {
        let page = source.wiki_page(slug)?;
        let rows = parse_attendance(&page.content);
        let applied = report.apply_attendance(&rows);
        info!("Applied {} of {} attendance rows from '{}'", applied, rows.len(), slug);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::{Author, Note};
    use crate::parser::{Contributor, MonthDay};

    fn note(author: &str, body: &str) -> Note {
        Note {
            id: 0,
            author: Author {
                name: author.to_string(),
                username: String::new(),
            },
            body: body.to_string(),
            system: true,
        }
    }

    fn discussion(notes: Vec<Note>) -> Discussion {
        Discussion {
            id: "d".to_string(),
            notes,
        }
    }

    fn who(name: &str) -> Contributor {
        Contributor::new(name)
    }

    #[test]
    fn test_discussion_sums_additions() {
        let ledger = aggregate_discussion(&discussion(vec![
            note("John Smith", "added 2h of time spent"),
            note("John Smith", "added 45m of time spent"),
            note("Jane Doe", "added 1h 30m of time spent"),
            note("Jane Doe", "nice work"),
        ]));

        assert_eq!(ledger.get(&who("John Smith")), Some(165));
        assert_eq!(ledger.get(&who("Jane Doe")), Some(90));
    }

    #[test]
    fn test_retraction_only_affects_earlier_notes() {
        let ledger = aggregate_discussion(&discussion(vec![
            note("John Smith", "added 2h"),
            note("Jane Doe", "added 1h"),
            note("John Smith", "removed time spent"),
            note("John Smith", "added 30m"),
        ]));

        assert_eq!(ledger.get(&who("John Smith")), Some(30));
        assert_eq!(ledger.get(&who("Jane Doe")), Some(60));
    }

    #[test]
    fn test_retraction_is_scoped_to_its_discussion() {
        let ledger = aggregate_issue(&[
            discussion(vec![note("John Smith", "added 1h")]),
            discussion(vec![note("John Smith", "added 2h"), note("John Smith", "removed time spent")]),
        ]);

        assert_eq!(ledger.get(&who("John Smith")), Some(60));
    }

    #[test]
    fn test_apply_attendance_routes_by_date() {
        let md = |m, d| MonthDay::new(m, d).unwrap();
        let mut report = TimeReport::new();
        report.push_sprint(Sprint::new("Sprint 1", Some(md(3, 1)), Some(md(3, 15))), TimeLedger::new());
        report.push_sprint(Sprint::new("Sprint 2", Some(md(3, 15)), Some(md(3, 29))), TimeLedger::new());

        let rows = vec![
            AttendanceRow { date: md(3, 15), contributor: who("John Smith"), minutes: 90 },
            AttendanceRow { date: md(3, 2), contributor: who("John Smith"), minutes: 30 },
            AttendanceRow { date: md(6, 1), contributor: who("Jane Doe"), minutes: 60 },
        ];

        assert_eq!(report.apply_attendance(&rows), 2);
        assert_eq!(report.sprints[0].totals.get(&who("John Smith")), Some(30));
        assert_eq!(report.sprints[1].totals.get(&who("John Smith")), Some(90));
        assert_eq!(report.overall.get(&who("John Smith")), Some(120));
        assert_eq!(report.overall.get(&who("Jane Doe")), None);
    }

    #[test]
    fn test_non_empty_sprints() {
        let mut report = TimeReport::new();
        let mut totals = TimeLedger::new();
        totals.add(who("John Smith"), 10);
        report.push_sprint(Sprint::new("Empty", None, None), TimeLedger::new());
        report.push_sprint(Sprint::new("Busy", None, None), totals);

        let titles: Vec<_> = report.non_empty_sprints().map(|s| s.sprint.title.as_str()).collect();
        assert_eq!(titles, vec!["Busy"]);
        assert_eq!(report.overall.total_minutes(), 10);
    }
}
