// src/config/settings.rs

//! Settings resolution: CLI flags, then the chosen preset, then
//! `[defaults]`, then built-in defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::LoadedConfig;
use crate::errors::{ExtprocError, Result};
use crate::exec::InvocationRequest;

/// Working directory when nothing else names one.
pub const DEFAULT_WORKING_DIR: &str = ".";

/// Strictness when nothing else sets it.
pub const DEFAULT_ENSURE_SUCCESS: bool = true;

/// Return the first present value, or `default` when all are absent.
pub fn first_value<T>(candidates: impl IntoIterator<Item = Option<T>>, default: T) -> T {
    candidates.into_iter().flatten().next().unwrap_or(default)
}

/// Build the invocation request for this run.
pub fn resolve_request(
    args: &CliArgs,
    config: Option<&LoadedConfig>,
) -> Result<InvocationRequest> {
    let preset = match &args.preset {
        Some(name) => {
            let cfg = config.ok_or_else(|| {
                ExtprocError::ConfigError(format!(
                    "preset '{}' requested but no settings file was loaded",
                    name
                ))
            })?;
            let preset = cfg.file.preset(name).ok_or_else(|| {
                ExtprocError::ConfigError(format!("unknown preset '{}'", name))
            })?;
            Some(preset)
        }
        None => None,
    };
    let defaults = config.map(|c| &c.file.defaults);

    let command = first_value(
        [args.command.clone(), preset.map(|p| p.cmd.clone())],
        String::new(),
    );
    if command.trim().is_empty() {
        return Err(ExtprocError::ConfigError(
            "no command given: pass COMMAND or --preset <NAME>".to_string(),
        ));
    }

    let arguments = first_value(
        [args.args.clone(), preset.and_then(|p| p.args.clone())],
        String::new(),
    );

    let working_dir = match &args.dir {
        Some(dir) => PathBuf::from(dir),
        None => {
            let from_file = preset
                .and_then(|p| p.dir.as_deref())
                .or_else(|| defaults.and_then(|d| d.working_dir.as_deref()));
            match (from_file, config) {
                (Some(dir), Some(cfg)) => relative_to(&cfg.root, dir),
                _ => PathBuf::from(DEFAULT_WORKING_DIR),
            }
        }
    };

    let ensure_success = first_value(
        [
            args.ensure_success_flag(),
            preset.and_then(|p| p.ensure_success),
            defaults.and_then(|d| d.ensure_success),
        ],
        DEFAULT_ENSURE_SUCCESS,
    );

    let request = InvocationRequest {
        working_dir,
        command,
        arguments,
        ensure_success,
    };
    debug!(?request, preset = ?args.preset, "resolved invocation");

    Ok(request)
}

fn relative_to(root: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}
