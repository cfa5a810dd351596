//! Handler for the `filter` command.

use crate::shell::Session;
use anyhow::Result;
use colored::Colorize;
use tasklist::engine::{PriorityFilter, StatusFilter, TodoFilters};

/// Updates the given parts of the filter set, or prints it.
///
/// Omitted options keep their current value; an empty category or search
/// clears that predicate.
pub fn handle(
    session: &mut Session,
    status: Option<StatusFilter>,
    priority: Option<PriorityFilter>,
    category: Option<String>,
    search: Option<String>,
    reset: bool,
) -> Result<()> {
    let unchanged =
        status.is_none() && priority.is_none() && category.is_none() && search.is_none();

    if reset {
        session.store.set_filters(TodoFilters::default());
    } else if !unchanged {
        let mut filters = session.store.filters().clone();
        if let Some(status) = status {
            filters.status = status;
        }
        if let Some(priority) = priority {
            filters.priority = priority;
        }
        if let Some(category) = category {
            filters.category = Some(category).filter(|c| !c.is_empty());
        }
        if let Some(search) = search {
            filters.search = Some(search).filter(|s| !s.is_empty());
        }
        session.store.set_filters(filters);
    }

    print_filters(session);
    Ok(())
}

fn print_filters(session: &Session) {
    let filters = session.store.filters();
    println!("{} Filters", "🔎".cyan());
    println!("   status:    {}", filters.status);
    println!("   priority:  {}", filters.priority);
    println!(
        "   category:  {}",
        filters.category.as_deref().unwrap_or("(any)")
    );
    println!(
        "   search:    {}",
        filters.search.as_deref().unwrap_or("(none)")
    );

    let categories = session.store.categories();
    if !categories.is_empty() {
        println!("   {}", format!("known categories: {}", categories.join(", ")).dimmed());
    }
}
