//! Handler for the `stats` command.

use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tasklist::engine::TodoStats;

#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    counts: TodoStats,
    completion_rate: f64,
}

/// Prints counts over the whole, unfiltered collection.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle(session: &Session, json: bool) -> Result<()> {
    let counts = session.store.stats();
    let completion_rate = completion_rate(&counts);

    if json {
        let report = StatsReport {
            counts,
            completion_rate,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} Statistics", "📊".cyan());
    println!("   Total:     {}", counts.total);
    println!("   Completed: {}", counts.completed.to_string().green());
    println!("   Pending:   {}", counts.pending.to_string().yellow());
    let overdue = counts.overdue.to_string();
    if counts.overdue > 0 {
        println!("   Overdue:   {}", overdue.red().bold());
    } else {
        println!("   Overdue:   {}", overdue.dimmed());
    }
    if counts.total > 0 {
        println!("   {}", format!("{:.0}% done", completion_rate * 100.0).dimmed());
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn completion_rate(counts: &TodoStats) -> f64 {
    if counts.total == 0 {
        return 0.0;
    }
    counts.completed as f64 / counts.total as f64
}
