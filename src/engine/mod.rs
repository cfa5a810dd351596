//! Core engine modules for the task list.

pub mod clock;
pub mod collate;
pub mod display;
pub mod error;
pub mod filter;
pub mod resolver;
pub mod sort;
pub mod stats;
pub mod store;
pub mod task;
pub mod types;

pub use error::{Result, TaskError};
pub use store::TaskStore;
pub use types::{
    Priority, PriorityFilter, SortDirection, SortKey, StatusFilter, Task, TaskDraft, TaskId,
    TaskPatch, TodoFilters, TodoStats,
};
