use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration from config.toml. Every field is optional; a missing
/// config file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Override for the store file location.
    #[serde(default)]
    pub store: Option<PathBuf>,
}
