use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::model::task::Task;

/// Error type for store internals. Never crosses the `TodoStore` boundary;
/// both trait methods degrade to warnings instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not serialize task list: {source}")]
    Serialize { source: serde_json::Error },
}

/// Durable round-trip of the task collection.
///
/// Both operations are total: a failed read yields an empty collection and a
/// failed write leaves the in-memory state authoritative for the session.
/// Failures surface only as warnings. Every save is a full snapshot that
/// replaces the prior value.
pub trait TodoStore {
    fn load(&self) -> Vec<Task>;
    fn save(&self, tasks: &[Task]);
}

/// Default backend: one JSON file holding the serialized task array.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore { path: path.into() }
    }

    /// Read and parse the store file. `Ok(None)` means no file exists yet,
    /// which is not an error — first run, or storage cleared externally.
    fn read(&self) -> Result<Option<Vec<Task>>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let tasks = serde_json::from_str(&text).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(tasks))
    }

    fn write(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)
            .map_err(|e| StoreError::Serialize { source: e })?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl TodoStore for JsonFileStore {
    fn load(&self) -> Vec<Task> {
        match self.read() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("starting with an empty list: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.write(tasks) {
            warn!("todo list not saved: {}", e);
        }
    }
}

/// Write `content` to `path` atomically using a temp file + rename, creating
/// parent directories as needed.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
