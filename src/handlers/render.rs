//! Terminal rendering shared by the handlers.

use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use tasklist::engine::display::{format_date, Locale};
use tasklist::engine::stats::is_overdue;
use tasklist::engine::{Priority, Task};

/// First eight characters of the id; enough to resolve in practice.
pub fn short_id(task: &Task) -> &str {
    let id = task.id.as_str();
    id.get(..8).unwrap_or(id)
}

pub fn status_icon(task: &Task, now: DateTime<Utc>) -> ColoredString {
    if task.completed {
        "✓".green()
    } else if is_overdue(task, now) {
        "!".red().bold()
    } else {
        "○".dimmed()
    }
}

pub fn priority_badge(priority: Priority, locale: Locale) -> ColoredString {
    let (r, g, b) = priority.rgb();
    priority.label(locale).truecolor(r, g, b)
}

pub fn local(date: &DateTime<Utc>) -> DateTime<Local> {
    date.with_timezone(&Local)
}

/// One-line summary used by `list` and the mutation handlers.
pub fn task_line(task: &Task, locale: Locale, now: DateTime<Utc>) -> String {
    let title = if task.completed {
        task.title.dimmed().strikethrough()
    } else {
        task.title.normal()
    };

    let mut line = format!(
        "{} [{}] {} ({})",
        status_icon(task, now),
        short_id(task).yellow(),
        title,
        priority_badge(task.priority, locale)
    );

    if let Some(due) = &task.due_date {
        let date = format_date(&local(due), locale);
        if is_overdue(task, now) {
            line.push_str(&format!("  {}", date.red()));
        } else {
            line.push_str(&format!("  {}", date.dimmed()));
        }
    }
    if let Some(category) = task.category.as_deref().filter(|c| !c.is_empty()) {
        line.push_str(&format!("  {}", format!("#{category}").blue()));
    }
    line
}
