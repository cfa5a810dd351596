//! Handler for the `done` command.

use super::render::task_line;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;

/// Flips a task between pending and completed.
///
/// # Errors
/// Returns error if the task cannot be resolved.
pub fn handle(session: &mut Session, task_ref: &str) -> Result<()> {
    let locale = session.config.locale;
    let id = session.store.resolve(task_ref)?.id.clone();
    let now = session.store.now();

    let task = session.store.toggle(&id)?;
    let verb = if task.completed {
        "Completed".green()
    } else {
        "Reopened".yellow()
    };
    println!("{verb} {}", task_line(task, locale, now));
    Ok(())
}
