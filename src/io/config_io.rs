use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::model::config::UserConfig;

/// Error type for config I/O. Unlike the store, a broken config file is
/// surfaced to the user rather than silently ignored.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tick")
}

/// Location of the user config file (`config.toml` in the platform config
/// dir). `None` when no home directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Default store file location: `todos.json` in the platform data dir,
/// falling back to the current directory when there is no home.
pub fn default_store_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join("todos.json"),
        None => PathBuf::from("todos.json"),
    }
}

/// Parse a config file. A missing file is not an error — it means defaults.
pub fn read_config(path: &Path) -> Result<UserConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserConfig::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the store file path: `--store` flag, then the config file's
/// `store` key, then the platform default.
pub fn resolve_store_path(flag: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(config_file) = config_path() {
        let config = read_config(&config_file)?;
        if let Some(path) = config.store {
            return Ok(path);
        }
    }
    Ok(default_store_path())
}
