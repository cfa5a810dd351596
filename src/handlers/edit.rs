//! Handler for the `edit` command.

use super::render::task_line;
use crate::shell::Session;
use anyhow::{bail, Result};
use chrono::Local;
use colored::Colorize;
use tasklist::engine::display::parse_date_input;
use tasklist::engine::{Priority, TaskPatch};

/// What the user asked to change. For optional fields `Some(None)` clears.
pub struct Edits {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

/// Folds a `--field VALUE` / `--clear-field` pair into a patch field.
pub fn field(value: Option<String>, clear: bool) -> Option<Option<String>> {
    if clear {
        Some(None)
    } else {
        value.map(|v| Some(v).filter(|v| !v.trim().is_empty()))
    }
}

/// Applies the edits to the resolved task.
///
/// # Errors
/// Returns error if the task cannot be resolved, nothing was asked for,
/// the new title is blank, or the due date does not parse.
pub fn handle(session: &mut Session, task_ref: &str, edits: Edits) -> Result<()> {
    let locale = session.config.locale;
    let id = session.store.resolve(task_ref)?.id.clone();

    let due_date = match edits.due {
        Some(Some(input)) => Some(Some(parse_date_input(&input, locale, &Local)?)),
        Some(None) => Some(None),
        None => None,
    };

    let patch = TaskPatch {
        title: edits.title,
        description: edits.description,
        completed: None,
        priority: edits.priority,
        due_date,
        category: edits.category,
    };
    if patch.is_empty() {
        bail!("Nothing to change. See `edit --help`.");
    }

    let now = session.store.now();
    let task = session.store.update(&id, patch)?;
    println!("{} Updated {}", "✓".green(), task_line(task, locale, now));
    Ok(())
}
