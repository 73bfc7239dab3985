// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ExtprocError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ExtprocError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.defaults, raw.command))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_defaults(cfg)?;
    validate_presets(cfg)?;
    Ok(())
}

fn validate_defaults(cfg: &RawConfigFile) -> Result<()> {
    if let Some(dir) = &cfg.defaults.working_dir {
        if dir.trim().is_empty() {
            return Err(ExtprocError::ConfigError(
                "[defaults].working_dir must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_presets(cfg: &RawConfigFile) -> Result<()> {
    for (name, preset) in cfg.command.iter() {
        if preset.cmd.trim().is_empty() {
            return Err(ExtprocError::ConfigError(format!(
                "[command.{}].cmd must not be empty",
                name
            )));
        }
        if let Some(dir) = &preset.dir {
            if dir.trim().is_empty() {
                return Err(ExtprocError::ConfigError(format!(
                    "[command.{}].dir must not be empty",
                    name
                )));
            }
        }
    }
    Ok(())
}
