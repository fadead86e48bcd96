use crate::error::ConfigError;
use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by both demo binaries. Every field has a default so an
/// empty file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub output: OutputConfig,
    pub users: UsersConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// SQLite file for saved users. `None` keeps users in memory.
    pub database: Option<PathBuf>,
}

impl DemoConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Colors stay off when `NO_COLOR` is set, whatever the file says.
    pub fn use_colors(&self) -> bool {
        colors_enabled(self.output.color, std::env::var_os("NO_COLOR").as_deref())
    }
}

/// A non-empty `NO_COLOR` turns colors off; an empty one is ignored.
pub fn colors_enabled(color: bool, no_color: Option<&OsStr>) -> bool {
    color && no_color.map_or(true, OsStr::is_empty)
}
