use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` is assigned at creation and never reused. `created_at` is epoch
/// milliseconds and is informational only — display order is the order of
/// the collection itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Creation time, epoch milliseconds. Kept as `createdAt` on the wire.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Create a task with a fresh id and the current time.
    /// `text` must already be trimmed and non-empty.
    pub fn new(text: String) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            completed: false,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// View selector over the task collection. Not persisted; every fresh
/// load starts at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task belongs to this view.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}
