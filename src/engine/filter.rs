//! Filtering by status, priority, category and free-text search.

use super::types::{StatusFilter, Task, TodoFilters};

/// Returns the tasks matching every active predicate, in input order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filters: &TodoFilters) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| matches(t, filters))
        .cloned()
        .collect()
}

/// True if `task` passes all of `filters`.
#[must_use]
pub fn matches(task: &Task, filters: &TodoFilters) -> bool {
    matches_status(task, filters.status)
        && filters.priority.accepts(task.priority)
        && matches_category(task, filters.category.as_deref())
        && matches_search(task, filters.search.as_deref())
}

fn matches_status(task: &Task, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Completed => task.completed,
        StatusFilter::Pending => !task.completed,
    }
}

fn matches_category(task: &Task, category: Option<&str>) -> bool {
    match category {
        None | Some("") => true,
        Some(wanted) => task.category.as_deref() == Some(wanted),
    }
}

fn matches_search(task: &Task, search: Option<&str>) -> bool {
    let Some(query) = search.filter(|s| !s.is_empty()) else {
        return true;
    };
    let query = query.to_lowercase();

    task.title.to_lowercase().contains(&query)
        || task
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
}
