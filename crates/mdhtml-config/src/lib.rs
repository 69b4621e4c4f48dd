//! User settings for the `mdhtml` converter, kept as TOML in
//! `~/.config/mdhtml/config.toml`.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory that receives `<stem>.html` when no output file is given.
    /// Stored as written; `~` and `$VAR` are expanded on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_dir: Option<PathBuf>,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";
    pub const HTML_EXTENSION: &'static str = "html";

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn set_output_dir(&mut self, output_dir: impl Into<PathBuf>) {
        self.output_dir = Some(output_dir.into());
    }

    /// Reads a config file. A missing file is `Ok(None)`, not an error.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(Self {
            output_dir: config.output_dir.map(expand_dir),
        }))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config, creating missing parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };

        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(config_path, content).map_err(write_error)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mdhtml");
        PathBuf::from(config_dir.as_ref()).join(Self::FILE_NAME)
    }

    /// Default HTML path for `input`: `<stem>.html` inside `output_dir`, or
    /// beside the input when none is set. `None` when `input` has no file name.
    pub fn output_path_for(&self, input: &Path) -> Option<PathBuf> {
        let mut file_name = OsString::from(input.file_stem()?);
        file_name.push(".");
        file_name.push(Self::HTML_EXTENSION);

        let dir = match self.output_dir() {
            Some(dir) => dir,
            None => input.parent().unwrap_or(Path::new("")),
        };
        Some(dir.join(file_name))
    }
}

/// Expands `~` and `$VAR`; an unknown variable leaves the path as written.
fn expand_dir(dir: PathBuf) -> PathBuf {
    let expanded =
        shellexpand::full(&dir.to_string_lossy()).map(|path| PathBuf::from(path.as_ref()));
    expanded.unwrap_or(dir)
}
