//! Handler for the `show` command.

use super::render::{local, priority_badge, status_icon};
use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tasklist::engine::display::format_date_time;
use tasklist::engine::stats::is_overdue;
use tasklist::engine::Task;

#[derive(Serialize)]
struct TaskView<'a> {
    #[serde(flatten)]
    task: &'a Task,
    overdue: bool,
    priority_label: &'static str,
    priority_color: &'static str,
}

/// Prints every field of one task.
///
/// # Errors
/// Returns error if the task cannot be resolved or serialization fails.
pub fn handle(session: &Session, task_ref: &str, json: bool) -> Result<()> {
    let locale = session.config.locale;
    let now = session.store.now();
    let task = session.store.resolve(task_ref)?;
    let overdue = is_overdue(task, now);

    if json {
        let view = TaskView {
            task,
            overdue,
            priority_label: task.priority.label(locale),
            priority_color: task.priority.color(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{} [{}] {}", status_icon(task, now), task.id.to_string().cyan(), task.title.bold());
    if let Some(description) = &task.description {
        println!("   {description}");
    }
    println!();

    let status = if task.completed {
        "completed".green()
    } else if overdue {
        "overdue".red()
    } else {
        "pending".yellow()
    };
    println!("   Status:    {status}");
    println!("   Priority:  {}", priority_badge(task.priority, locale));
    if let Some(category) = &task.category {
        println!("   Category:  {category}");
    }
    if let Some(due) = &task.due_date {
        println!("   Due:       {}", format_date_time(&local(due), locale));
    }
    println!(
        "   Created:   {}",
        format_date_time(&local(&task.created_at), locale).dimmed()
    );
    println!(
        "   Updated:   {}",
        format_date_time(&local(&task.updated_at), locale).dimmed()
    );
    Ok(())
}
