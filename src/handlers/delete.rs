//! Handlers for the `rm` and `clear` commands.

use super::render::short_id;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;

/// Deletes one task after confirmation.
///
/// # Errors
/// Returns error if the task cannot be resolved or input fails.
pub fn handle(session: &mut Session, task_ref: &str) -> Result<()> {
    let task = session.store.resolve(task_ref)?;
    let id = task.id.clone();
    let question = format!("Delete [{}] {}?", short_id(task).yellow(), task.title);

    if !session.confirm(&question)? {
        println!("   {}", "(kept)".dimmed());
        return Ok(());
    }

    let removed = session.store.delete(&id)?;
    println!("{} Deleted [{}] {}", "✓".green(), short_id(&removed), removed.title);
    Ok(())
}

/// Deletes every completed task after confirmation.
///
/// # Errors
/// Returns error if input fails.
pub fn clear_completed(session: &mut Session) -> Result<()> {
    let completed = session.store.stats().completed;
    if completed == 0 {
        println!("   {}", "(no completed tasks)".dimmed());
        return Ok(());
    }

    let question = format!("Delete {completed} completed task(s)?");
    if !session.confirm(&question)? {
        println!("   {}", "(kept)".dimmed());
        return Ok(());
    }

    let removed = session.store.clear_completed();
    println!("{} Cleared {removed} completed task(s)", "✓".green());
    Ok(())
}
