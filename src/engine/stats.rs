//! Derived statistics. Never stored; recomputed from the collection on
//! every call against the instant the caller passes in.

use super::types::{Task, TodoStats};
use chrono::{DateTime, Utc};

/// An incomplete task whose due date is strictly before `now`.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.completed && task.due_date.is_some_and(|due| due < now)
}

#[must_use]
pub fn compute_stats(tasks: &[Task], now: DateTime<Utc>) -> TodoStats {
    let mut stats = TodoStats {
        total: tasks.len(),
        ..TodoStats::default()
    };
    for task in tasks {
        if task.completed {
            stats.completed += 1;
        } else if is_overdue(task, now) {
            stats.overdue += 1;
        }
    }
    stats.pending = stats.total - stats.completed;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Priority, TaskId};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
    }

    fn make_task(completed: bool, due_date: Option<DateTime<Utc>>) -> Task {
        Task {
            id: TaskId::new("t"),
            title: "t".to_string(),
            description: None,
            completed,
            priority: Priority::Medium,
            created_at: now() - Duration::days(10),
            updated_at: now() - Duration::days(10),
            due_date,
            category: None,
        }
    }

    #[test]
    fn test_overdue_requires_past_due_date() {
        assert!(is_overdue(&make_task(false, Some(now() - Duration::seconds(1))), now()));
        assert!(!is_overdue(&make_task(false, Some(now() + Duration::seconds(1))), now()));
        assert!(!is_overdue(&make_task(false, None), now()));
    }

    #[test]
    fn test_due_exactly_now_is_not_overdue() {
        assert!(!is_overdue(&make_task(false, Some(now())), now()));
    }

    #[test]
    fn test_completed_is_never_overdue() {
        let long_ago = now() - Duration::days(365);
        assert!(!is_overdue(&make_task(true, Some(long_ago)), now()));
    }

    #[test]
    fn test_stats_counts() {
        let yesterday = now() - Duration::days(1);
        let tasks = vec![
            make_task(false, Some(yesterday)),
            make_task(true, Some(yesterday)),
            make_task(false, None),
            make_task(false, Some(now() + Duration::days(1))),
        ];
        let stats = compute_stats(&tasks, now());
        assert_eq!(
            stats,
            TodoStats {
                total: 4,
                completed: 1,
                pending: 3,
                overdue: 1,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(compute_stats(&[], now()), TodoStats::default());
    }

    #[test]
    fn test_overdue_depends_on_evaluation_instant() {
        let tasks = vec![make_task(false, Some(now()))];
        assert_eq!(compute_stats(&tasks, now()).overdue, 0);
        assert_eq!(compute_stats(&tasks, now() + Duration::minutes(1)).overdue, 1);
    }
}
