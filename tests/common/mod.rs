//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use tasklist::engine::{Priority, Task, TaskId};

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: None,
        completed: false,
        priority: Priority::Medium,
        created_at: epoch(),
        updated_at: epoch(),
        due_date: None,
        category: None,
    }
}

pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

pub fn minutes(n: i64) -> Duration {
    Duration::minutes(n)
}
