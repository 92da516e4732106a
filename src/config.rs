//! Compiler configuration loaded from `sqlquery.toml`.
//!
//! ```toml
//! dialect = "ansi"
//! ```

use crate::error::QueryResult;
use crate::transpiler::{Dialect, SqlGenerator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "sqlquery.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialect used by callers that compile through the configuration.
    pub dialect: Dialect,
}

impl Config {
    pub fn from_toml_str(content: &str) -> QueryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> QueryResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load `./sqlquery.toml`, then `<config dir>/sqlquery/config.toml`,
    /// falling back to the defaults when neither exists.
    pub fn load() -> QueryResult<Self> {
        for path in Self::search_paths() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading sqlquery config");
                return Self::from_path(&path);
            }
        }
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlquery").join("config.toml"));
        }
        paths
    }

    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        self.dialect.generator()
    }
}
