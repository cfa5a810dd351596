//! Task Resolver: Matches human queries to tasks in a collection.

use super::error::{Result, TaskError};
use super::types::Task;
use std::collections::HashSet;

const FUZZY_THRESHOLD: f64 = 0.3;

/// Resolves a user query into a task.
///
/// Tried in order: exact id, case-insensitive title, unique id prefix,
/// then the best fuzzy title match above the threshold.
///
/// # Errors
/// Returns `NotFound` if nothing matches, `Ambiguous` if an id prefix or
/// the best fuzzy score is shared by more than one task.
pub fn resolve<'a>(tasks: &'a [Task], query: &str) -> Result<&'a Task> {
    let query = query.trim();
    if query.is_empty() {
        return Err(TaskError::not_found(query));
    }

    if let Some(task) = tasks.iter().find(|t| t.id.as_str() == query) {
        return Ok(task);
    }

    let query_lower = query.to_lowercase();
    if let Some(task) = tasks.iter().find(|t| t.title.to_lowercase() == query_lower) {
        return Ok(task);
    }

    let prefixed: Vec<_> = tasks
        .iter()
        .filter(|t| t.id.as_str().starts_with(query))
        .collect();
    if !prefixed.is_empty() {
        return single(query, &prefixed);
    }

    fuzzy_resolve(tasks, &query_lower)
}

fn fuzzy_resolve<'a>(tasks: &'a [Task], query: &str) -> Result<&'a Task> {
    let words: Vec<_> = query.split_whitespace().collect();

    let mut matches: Vec<_> = tasks
        .iter()
        .map(|t| (calculate_score(t, query, &words), t))
        .filter(|(s, _)| *s > FUZZY_THRESHOLD)
        .collect();

    matches.sort_by(|a, b| b.0.total_cmp(&a.0));

    let Some(&(best, _)) = matches.first() else {
        return Err(TaskError::not_found(query));
    };
    let top: Vec<_> = matches
        .iter()
        .take_while(|(s, _)| best - s < f64::EPSILON)
        .map(|(_, t)| *t)
        .collect();
    single(query, &top)
}

/// The only candidate, or `Ambiguous` naming all of them.
fn single<'a>(query: &str, candidates: &[&'a Task]) -> Result<&'a Task> {
    match candidates {
        [task] => Ok(*task),
        [] => Err(TaskError::not_found(query)),
        many => Err(TaskError::Ambiguous {
            query: query.to_string(),
            candidates: many.iter().map(|t| t.id.to_string()).collect(),
        }),
    }
}

/// Scores a title against a lowercased query, capped at 1.0.
fn calculate_score(task: &Task, query: &str, query_words: &[&str]) -> f64 {
    let title = task.title.to_lowercase();

    let mut score = 0.0;
    if title.contains(query) {
        score += 0.7;
    }
    if title.starts_with(query) {
        score += 0.3;
    }
    for word in query_words {
        if title.contains(word) {
            score += 0.25;
        }
    }
    score += char_overlap(&title, query) * 0.4;

    score.min(1.0)
}

/// Shared characters over all characters used by title and query.
#[allow(clippy::cast_precision_loss)]
fn char_overlap(title: &str, query: &str) -> f64 {
    let title: HashSet<char> = title.chars().collect();
    let query: HashSet<char> = query.chars().collect();

    let union = title.union(&query).count();
    if union == 0 {
        return 0.0;
    }
    title.intersection(&query).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Priority, TaskId};
    use chrono::{TimeZone, Utc};

    fn make_task(id: &str, title: &str) -> Task {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            description: None,
            completed: false,
            priority: Priority::Medium,
            created_at: at,
            updated_at: at,
            due_date: None,
            category: None,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task("a1f0", "Buy groceries"),
            make_task("a1c9", "Write quarterly report"),
            make_task("7b22", "Call mom"),
        ]
    }

    #[test]
    fn test_exact_id() {
        let tasks = sample();
        assert_eq!(resolve(&tasks, "7b22").unwrap().title, "Call mom");
    }

    #[test]
    fn test_unique_prefix() {
        let tasks = sample();
        assert_eq!(resolve(&tasks, "a1f").unwrap().title, "Buy groceries");
    }

    #[test]
    fn test_ambiguous_prefix() {
        let tasks = sample();
        match resolve(&tasks, "a1") {
            Err(TaskError::Ambiguous { candidates, .. }) => {
                assert_eq!(candidates, ["a1f0", "a1c9"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_title_match_ignores_case() {
        let tasks = sample();
        assert_eq!(resolve(&tasks, "call MOM").unwrap().id.as_str(), "7b22");
    }

    #[test]
    fn test_fuzzy_title() {
        let tasks = sample();
        assert_eq!(resolve(&tasks, "report").unwrap().id.as_str(), "a1c9");
        assert_eq!(resolve(&tasks, "groceries").unwrap().id.as_str(), "a1f0");
    }

    #[test]
    fn test_title_wins_over_id_prefix() {
        let tasks = vec![make_task("a1f0", "Buy groceries"), make_task("7b22", "a")];
        assert_eq!(resolve(&tasks, "a").unwrap().id.as_str(), "7b22");
        assert_eq!(resolve(&tasks, "A").unwrap().id.as_str(), "7b22");
        assert_eq!(resolve(&tasks, "a1").unwrap().id.as_str(), "a1f0");
    }

    #[test]
    fn test_fuzzy_tie_is_ambiguous() {
        let tasks = vec![make_task("11", "Write report"), make_task("22", "Report bugs")];
        match resolve(&tasks, "report") {
            Err(TaskError::Ambiguous { candidates, .. }) => {
                assert_eq!(candidates, ["11", "22"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert_eq!(resolve(&tasks, "write report").unwrap().id.as_str(), "11");
    }

    #[test]
    fn test_no_match() {
        let tasks = sample();
        assert!(matches!(resolve(&tasks, "zzzz"), Err(TaskError::NotFound { .. })));
        assert!(matches!(resolve(&tasks, "  "), Err(TaskError::NotFound { .. })));
    }
}
