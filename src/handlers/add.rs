//! Handler for the `add` command.

use super::render::task_line;
use crate::shell::Session;
use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use tasklist::engine::display::parse_date_input;
use tasklist::engine::{Priority, TaskDraft};

/// Creates a task from the shell arguments.
///
/// # Errors
/// Returns error if the title is blank or the due date does not parse.
pub fn handle(
    session: &mut Session,
    title: &str,
    description: Option<String>,
    priority: Priority,
    due: Option<&str>,
    category: Option<String>,
) -> Result<()> {
    let locale = session.config.locale;
    let due_date = due
        .map(|d| parse_date_input(d, locale, &Local))
        .transpose()?;

    let draft = TaskDraft {
        title: title.to_string(),
        description: description.filter(|d| !d.trim().is_empty()),
        priority,
        due_date,
        category: category.filter(|c| !c.trim().is_empty()),
        completed: false,
    };

    let now = session.store.now();
    let task = session.store.add(draft)?;
    println!("{} Added {}", "✓".green(), task_line(task, locale, now));
    Ok(())
}
