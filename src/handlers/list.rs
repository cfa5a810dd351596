//! Handler for the `list` command.

use super::render::task_line;
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;

/// Lists the filtered and sorted view.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle(session: &Session, json: bool) -> Result<()> {
    let tasks = session.store.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let (key, direction) = session.store.sort();
    println!(
        "{} {} of {} tasks {}",
        "📋".cyan(),
        tasks.len(),
        session.store.all().len(),
        format!("(sorted by {key} {direction})").dimmed()
    );

    if tasks.is_empty() {
        println!("   (Nothing matches the current filters)");
        return Ok(());
    }

    let now = session.store.now();
    for task in &tasks {
        println!("   {}", task_line(task, session.config.locale, now));
    }
    Ok(())
}
