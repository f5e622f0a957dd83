//! Sprint selection and date-to-sprint resolution.

use crate::gitlab::Milestone;
use crate::parser::MonthDay;
use log::{debug, warn};

/// An iteration period backed by a milestone
///
/// Dates have month/day granularity; the year is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    pub title: String,
    /// Inclusive start, if the milestone has one
    pub start: Option<MonthDay>,
    /// Exclusive end (the milestone due date), if the milestone has one
    pub end: Option<MonthDay>,
}

impl Sprint {
    pub fn new(title: impl Into<String>, start: Option<MonthDay>, end: Option<MonthDay>) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// True if `date` falls in `[start, end)`
    ///
    /// A sprint missing either date contains nothing.
    pub fn contains(&self, date: MonthDay) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date < end,
            _ => false,
        }
    }
}

impl From<&Milestone> for Sprint {
    fn from(milestone: &Milestone) -> Self {
        if milestone.start_date.is_none() || milestone.due_date.is_none() {
            warn!(
                "Milestone '{}' has no start or due date; attendance cannot be assigned to it",
                milestone.title
            );
        }
        Sprint::new(
            milestone.title.clone(),
            milestone.start_date.map(MonthDay::from),
            milestone.due_date.map(MonthDay::from),
        )
    }
}

/// Keep milestones whose title contains `filter`, preserving order
///
/// An empty filter keeps every milestone.
pub fn select_sprints(milestones: Vec<Milestone>, filter: &str) -> Vec<Milestone> {
    let total = milestones.len();
    let selected: Vec<Milestone> = milestones
        .into_iter()
        .filter(|milestone| milestone.title.contains(filter))
        .collect();

    debug!("Selected {} of {} milestones with filter '{}'", selected.len(), total, filter);
    selected
}

/// Index of the first sprint, in listed order, whose range contains `date`
pub fn resolve_sprint_index(sprints: &[Sprint], date: MonthDay) -> Option<usize> {
    sprints.iter().position(|sprint| sprint.contains(date))
}

/// The first sprint, in listed order, whose range contains `date`
pub fn resolve_sprint(sprints: &[Sprint], date: MonthDay) -> Option<&Sprint> {
    resolve_sprint_index(sprints, date).map(|index| &sprints[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn md(month: u32, day: u32) -> MonthDay {
        MonthDay::new(month, day).unwrap()
    }

    fn sprints() -> Vec<Sprint> {
        vec![
            Sprint::new("Sprint 1", Some(md(1, 15)), Some(md(2, 1))),
            Sprint::new("Sprint 2", Some(md(2, 1)), Some(md(2, 15))),
        ]
    }

    #[test]
    fn test_half_open_ranges() {
        let sprints = sprints();
        assert_eq!(resolve_sprint(&sprints, md(2, 1)).unwrap().title, "Sprint 2");
        assert_eq!(resolve_sprint(&sprints, md(1, 15)).unwrap().title, "Sprint 1");
        assert_eq!(resolve_sprint(&sprints, md(1, 31)).unwrap().title, "Sprint 1");
        assert!(resolve_sprint(&sprints, md(1, 10)).is_none());
        assert!(resolve_sprint(&sprints, md(2, 15)).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let sprints = vec![
            Sprint::new("Early", Some(md(3, 1)), Some(md(3, 20))),
            Sprint::new("Overlap", Some(md(3, 10)), Some(md(3, 30))),
        ];
        assert_eq!(resolve_sprint_index(&sprints, md(3, 15)), Some(0));
        assert_eq!(resolve_sprint_index(&sprints, md(3, 25)), Some(1));
    }

    #[test]
    fn test_undated_sprint_contains_nothing() {
        let sprint = Sprint::new("Backlog", None, Some(md(12, 31)));
        assert!(!sprint.contains(md(6, 1)));
    }

    #[test]
    fn test_from_milestone_ignores_year() {
        let milestone = Milestone {
            id: 1,
            iid: 1,
            title: "Sprint 5".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 5, 1),
            due_date: NaiveDate::from_ymd_opt(2023, 5, 15),
        };
        let sprint = Sprint::from(&milestone);
        assert!(sprint.contains(md(5, 10)));
    }

    #[test]
    fn test_select_sprints() {
        let milestone = |id: u64, title: &str| Milestone {
            id,
            iid: id,
            title: title.to_string(),
            start_date: None,
            due_date: None,
        };
        let all = vec![milestone(1, "Sprint 1"), milestone(2, "Release 1.0"), milestone(3, "Sprint 2")];

        let selected = select_sprints(all.clone(), "Sprint");
        assert_eq!(selected.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(select_sprints(all, "").len(), 3);
    }
}
