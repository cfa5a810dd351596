//! Task construction and update.
//!
//! Both operations are pure apart from the injected clock and id source:
//! they return new values and never touch their inputs.

use super::clock::{Clock, IdSource};
use super::error::{Result, TaskError};
use super::types::{Task, TaskDraft, TaskPatch};

/// Builds a new task with a fresh id and `created_at == updated_at == now`.
///
/// # Errors
/// Returns `TaskError::EmptyTitle` if the title is blank after trimming.
pub fn create_task(draft: TaskDraft, clock: &dyn Clock, ids: &mut dyn IdSource) -> Result<Task> {
    ensure_title(&draft.title)?;

    let now = clock.now();
    Ok(Task {
        id: ids.next_id(),
        title: draft.title,
        description: draft.description,
        completed: draft.completed,
        priority: draft.priority,
        created_at: now,
        updated_at: now,
        due_date: draft.due_date,
        category: draft.category,
    })
}

/// Applies `patch` to a copy of `task` and refreshes `updated_at`.
///
/// `updated_at` is refreshed even when the patch changes nothing, and never
/// moves backwards if the clock does.
///
/// # Errors
/// Returns `TaskError::EmptyTitle` if the patch carries a blank title.
pub fn update_task(task: &Task, patch: TaskPatch, clock: &dyn Clock) -> Result<Task> {
    if let Some(title) = &patch.title {
        ensure_title(title)?;
    }

    let mut next = task.clone();
    if let Some(title) = patch.title {
        next.title = title;
    }
    if let Some(description) = patch.description {
        next.description = description;
    }
    if let Some(completed) = patch.completed {
        next.completed = completed;
    }
    if let Some(priority) = patch.priority {
        next.priority = priority;
    }
    if let Some(due_date) = patch.due_date {
        next.due_date = due_date;
    }
    if let Some(category) = patch.category {
        next.category = category;
    }
    next.updated_at = clock.now().max(task.updated_at);
    Ok(next)
}

fn ensure_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::{FixedClock, SequentialIds};
    use crate::engine::types::Priority;
    use chrono::{Duration, TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let task = create_task(
            TaskDraft::new("Buy milk").priority(Priority::High),
            &clock,
            &mut ids,
        )
        .unwrap();

        assert_eq!(task.id.as_str(), "1");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert_eq!(task.created_at, clock.now());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_create_keeps_optional_fields() {
        let clock = clock();
        let due = clock.now() + Duration::days(2);
        let task = create_task(
            TaskDraft::new("Report")
                .description("Quarterly numbers")
                .category("work")
                .due(due),
            &clock,
            &mut SequentialIds::default(),
        )
        .unwrap();

        assert_eq!(task.description.as_deref(), Some("Quarterly numbers"));
        assert_eq!(task.category.as_deref(), Some("work"));
        assert_eq!(task.due_date, Some(due));
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut ids = SequentialIds::default();
        assert_eq!(
            create_task(TaskDraft::new("   "), &clock(), &mut ids),
            Err(TaskError::EmptyTitle)
        );
        assert_eq!(
            create_task(TaskDraft::new(""), &clock(), &mut ids),
            Err(TaskError::EmptyTitle)
        );
    }

    #[test]
    fn test_update_preserves_identity() {
        let clock = clock();
        let task = create_task(TaskDraft::new("a"), &clock, &mut SequentialIds::default()).unwrap();
        clock.advance(Duration::minutes(3));

        let patch = TaskPatch {
            title: Some("b".to_string()),
            completed: Some(true),
            ..TaskPatch::default()
        };
        let updated = update_task(&task, patch, &clock).unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(updated.title, "b");
        assert!(updated.completed);
        assert_eq!(updated.updated_at, clock.now());
        assert_eq!(task.title, "a");
    }

    #[test]
    fn test_empty_patch_still_touches_updated_at() {
        let clock = clock();
        let task = create_task(TaskDraft::new("a"), &clock, &mut SequentialIds::default()).unwrap();
        clock.advance(Duration::seconds(1));

        let updated = update_task(&task, TaskPatch::default(), &clock).unwrap();
        assert!(updated.updated_at > task.updated_at);
    }

    #[test]
    fn test_updated_at_never_goes_backwards() {
        let clock = clock();
        let task = create_task(TaskDraft::new("a"), &clock, &mut SequentialIds::default()).unwrap();
        clock.advance(Duration::hours(-1));

        let updated = update_task(&task, TaskPatch::default(), &clock).unwrap();
        assert_eq!(updated.updated_at, task.updated_at);
    }

    #[test]
    fn test_patch_clears_optional_fields() {
        let clock = clock();
        let task = create_task(
            TaskDraft::new("a").category("home").description("d"),
            &clock,
            &mut SequentialIds::default(),
        )
        .unwrap();

        let patch = TaskPatch {
            category: Some(None),
            ..TaskPatch::default()
        };
        let updated = update_task(&task, patch, &clock).unwrap();
        assert_eq!(updated.category, None);
        assert_eq!(updated.description.as_deref(), Some("d"));
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let clock = clock();
        let task = create_task(TaskDraft::new("a"), &clock, &mut SequentialIds::default()).unwrap();
        let patch = TaskPatch {
            title: Some(" \t".to_string()),
            ..TaskPatch::default()
        };
        assert_eq!(update_task(&task, patch, &clock), Err(TaskError::EmptyTitle));
    }
}
