use serde::Serialize;

use crate::model::task::{Filter, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub filter: Filter,
    pub tasks: Vec<&'a Task>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub cleared: usize,
}

// ---------------------------------------------------------------------------
// Plain-text rendering
// ---------------------------------------------------------------------------

/// First eight characters of a task id, enough to be unique in any list a
/// human would keep by hand.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// One listing row: `[x] 1a2b3c4d  text`
pub fn format_task_row(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    format!("[{}] {}  {}", mark, short_id(&task.id), task.text)
}

/// Message shown when a view has nothing in it.
pub fn empty_view_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "no tasks",
        Filter::Active => "no active tasks",
        Filter::Completed => "no completed tasks",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_id_truncates_uuids() {
        assert_eq!(short_id("4a1b2c3d-0000-0000-0000-000000000000"), "4a1b2c3d");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn task_row_shows_completion_mark() {
        let mut task = Task {
            id: "4a1b2c3d-0000-0000-0000-000000000000".to_string(),
            text: "walk dog".to_string(),
            completed: false,
            created_at: 0,
        };
        assert_eq!(format_task_row(&task), "[ ] 4a1b2c3d  walk dog");

        task.completed = true;
        assert_eq!(format_task_row(&task), "[x] 4a1b2c3d  walk dog");
    }
}
