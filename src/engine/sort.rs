//! Ordering a collection by one key and a direction.

use super::collate::compare_titles;
use super::types::{SortDirection, SortKey, Task};
use std::cmp::Ordering;

/// Returns a sorted copy of `tasks`.
///
/// The sort is stable, and `Desc` flips each comparison rather than
/// reversing the output, so ties keep their input order either way.
#[must_use]
pub fn sort_tasks(tasks: &[Task], key: SortKey, direction: SortDirection) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

/// Ascending comparison of two tasks under `key`.
#[must_use]
pub fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::DueDate => match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(&y),
        },
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::Title => compare_titles(&a.title, &b.title),
    }
}
