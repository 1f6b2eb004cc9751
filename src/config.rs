use crate::rewrite::BoundaryClass;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".snaker.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub boundary: BoundaryClass,

    /// Keep a `.bak` copy of a file before rewriting it in place
    #[serde(default)]
    pub backup: bool,

    #[serde(default = "default_context_width")]
    pub context_width: usize,
}

/// One config file as written; unset keys leave lower layers alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub boundary: Option<BoundaryClass>,
    pub backup: Option<bool>,
    pub context_width: Option<usize>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn default_context_width() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boundary: BoundaryClass::default(),
            backup: false,
            context_width: default_context_width(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(boundary: Option<BoundaryClass>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = ConfigFile::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = ConfigFile::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(boundary) = boundary {
            config.boundary = boundary;
        }

        Ok(config)
    }

    /// Defaults overlaid with a single config file
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigFile::from_file(path)?))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(boundary) = other.boundary {
            self.boundary = boundary;
        }
        if let Some(backup) = other.backup {
            self.backup = backup;
        }
        if let Some(context_width) = other.context_width {
            self.context_width = context_width;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "snaker").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
