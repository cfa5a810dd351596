//! Handler for the `sort` command.

use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use tasklist::engine::{SortDirection, SortKey};

/// Sets the sort key; the direction is kept unless given.
pub fn handle(session: &mut Session, key: SortKey, direction: Option<SortDirection>) -> Result<()> {
    let (_, current) = session.store.sort();
    let direction = direction.unwrap_or(current);
    session.store.set_sort(key, direction);
    println!("{} Sorting by {} {}", "↕".cyan(), key.to_string().bold(), direction);
    Ok(())
}
