//! Task Store: the single authoritative collection and the intents that
//! change it.
//!
//! Every mutation goes through the pure engine functions and then replaces
//! the stored record; the derived view and the statistics are recomputed on
//! demand and never cached.

use super::clock::{Clock, IdSource, SystemClock, UuidIds};
use super::error::{Result, TaskError};
use super::filter::filter_tasks;
use super::resolver::resolve;
use super::sort::sort_tasks;
use super::stats::compute_stats;
use super::task::{create_task, update_task};
use super::types::{
    SortDirection, SortKey, Task, TaskDraft, TaskId, TaskPatch, TodoFilters, TodoStats,
};
use std::collections::BTreeSet;
use tracing::debug;

pub struct TaskStore {
    tasks: Vec<Task>,
    filters: TodoFilters,
    sort_key: SortKey,
    direction: SortDirection,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// An empty store on wall-clock time with UUID identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(Box::new(SystemClock), Box::new(UuidIds))
    }

    #[must_use]
    pub fn with_sources(clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        Self {
            tasks: Vec::new(),
            filters: TodoFilters::default(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
            clock,
            ids,
        }
    }

    /// Creates a task and puts it at the front of the collection.
    ///
    /// # Errors
    /// Returns `EmptyTitle` if the draft title is blank.
    pub fn add(&mut self, draft: TaskDraft) -> Result<&Task> {
        let task = create_task(draft, self.clock.as_ref(), self.ids.as_mut())?;
        debug!(id = %task.id, title = %task.title, "task added");
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Applies a partial update to the task with `id`.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id, `EmptyTitle` for a blank title.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> Result<&Task> {
        let index = self.index_of(id)?;
        let next = update_task(&self.tasks[index], patch, self.clock.as_ref())?;
        debug!(id = %id, "task updated");
        self.tasks[index] = next;
        Ok(&self.tasks[index])
    }

    /// Flips the completion flag.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    pub fn toggle(&mut self, id: &TaskId) -> Result<&Task> {
        let index = self.index_of(id)?;
        let patch = TaskPatch {
            completed: Some(!self.tasks[index].completed),
            ..TaskPatch::default()
        };
        let next = update_task(&self.tasks[index], patch, self.clock.as_ref())?;
        debug!(id = %id, completed = next.completed, "task toggled");
        self.tasks[index] = next;
        Ok(&self.tasks[index])
    }

    /// Removes a task entirely and hands it back.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    pub fn delete(&mut self, id: &TaskId) -> Result<Task> {
        let index = self.index_of(id)?;
        debug!(id = %id, "task deleted");
        Ok(self.tasks.remove(index))
    }

    /// Removes every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        debug!(removed, "completed tasks cleared");
        removed
    }

    pub fn set_filters(&mut self, filters: TodoFilters) {
        debug!(?filters, "filters changed");
        self.filters = filters;
    }

    #[must_use]
    pub fn filters(&self) -> &TodoFilters {
        &self.filters
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        debug!(%key, %direction, "sort changed");
        self.sort_key = key;
        self.direction = direction;
    }

    #[must_use]
    pub fn sort(&self) -> (SortKey, SortDirection) {
        (self.sort_key, self.direction)
    }

    /// The filtered and sorted view under the current settings.
    #[must_use]
    pub fn view(&self) -> Vec<Task> {
        let filtered = filter_tasks(&self.tasks, &self.filters);
        sort_tasks(&filtered, self.sort_key, self.direction)
    }

    /// Every task, unfiltered, in storage order (newest first).
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Statistics over the whole collection, as of now.
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        compute_stats(&self.tasks, self.clock.now())
    }

    /// The store's notion of the current instant.
    #[must_use]
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Distinct categories in use, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter_map(|t| t.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Maps a user reference (id, id prefix or title) to a task.
    ///
    /// # Errors
    /// Returns `NotFound` or `Ambiguous`.
    pub fn resolve(&self, query: &str) -> Result<&Task> {
        resolve(&self.tasks, query)
    }

    fn index_of(&self, id: &TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TaskError::not_found(id.as_str()))
    }
}
