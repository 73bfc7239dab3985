// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ExtprocError, Result};

/// File name looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "Extproc.toml";

/// A validated settings file together with the directory it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub file: ConfigFile,
    /// Base for relative `dir` / `working_dir` values in the file.
    pub root: PathBuf,
}

/// Load a settings file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked version.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a settings file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LoadedConfig> {
    let path = path.as_ref();
    let raw_config = load_from_path(path)?;
    let file = ConfigFile::try_from(raw_config)?;
    Ok(LoadedConfig {
        file,
        root: config_root_dir(path),
    })
}

/// Load the settings the CLI asked for.
///
/// - An explicit path must exist.
/// - Without one, [`DEFAULT_CONFIG_FILE`] is used only if it is present.
pub fn load_optional(explicit: Option<&str>) -> Result<Option<LoadedConfig>> {
    match explicit {
        Some(path) => {
            let path = Path::new(path);
            if !path.is_file() {
                return Err(ExtprocError::ConfigError(format!(
                    "settings file {} does not exist",
                    path.display()
                )));
            }
            load_and_validate(path).map(Some)
        }
        None => {
            let path = default_config_path();
            if path.is_file() {
                debug!(path = %path.display(), "loading default settings file");
                load_and_validate(&path).map(Some)
            } else {
                Ok(None)
            }
        }
    }
}

/// Default settings path: `Extproc.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// - "configs/Extproc.toml" → "configs"
/// - bare "Extproc.toml" (parent = "") → "."
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
