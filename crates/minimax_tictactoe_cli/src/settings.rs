//! Optional TOML settings for the command-line driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Defaults for the `selfplay` command, overridable by flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Search level for the engine playing X.
    #[serde(default = "default_level")]
    x_level: u8,

    /// Search level for the engine playing O.
    #[serde(default = "default_level")]
    o_level: u8,
}

fn default_games() -> u32 {
    10
}

fn default_level() -> u8 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            games: default_games(),
            x_level: default_level(),
            o_level: default_level(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(games = settings.games, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        games: Option<u32>,
        x_level: Option<u8>,
        o_level: Option<u8>,
    ) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        if let Some(level) = x_level {
            self.x_level = level;
        }
        if let Some(level) = o_level {
            self.o_level = level;
        }
        self
    }
}

/// Failure to load a settings file.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("Failed to read settings file {}: {}", path.display(), source)]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The file is not valid settings TOML.
    #[display("Failed to parse settings file {}: {}", path.display(), source)]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML failure.
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Path of the settings file involved.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}
