// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level settings as read from a TOML file, before validation.
///
/// ```toml
/// [defaults]
/// ensure_success = true
/// working_dir = "."
///
/// [command.restore]
/// cmd = "dotnet"
/// args = "restore --no-cache"
/// dir = "src"
/// ensure_success = false
/// ```
///
/// All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Presets from `[command.<name>]`, keyed by preset name.
    #[serde(default)]
    pub command: BTreeMap<String, CommandConfig>,
}

/// Validated settings. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub defaults: DefaultsSection,
    pub command: BTreeMap<String, CommandConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        defaults: DefaultsSection,
        command: BTreeMap<String, CommandConfig>,
    ) -> Self {
        Self { defaults, command }
    }

    pub fn preset(&self, name: &str) -> Option<&CommandConfig> {
        self.command.get(name)
    }
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsSection {
    /// Strictness used when neither the CLI nor the preset sets one.
    #[serde(default)]
    pub ensure_success: Option<bool>,

    /// Working directory used when neither the CLI nor the preset sets one.
    #[serde(default)]
    pub working_dir: Option<String>,
}

/// `[command.<name>]` preset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandConfig {
    /// Executable name or path.
    pub cmd: String,

    /// Argument string, passed through as-is.
    #[serde(default)]
    pub args: Option<String>,

    /// Working directory, relative to the settings file's directory.
    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default)]
    pub ensure_success: Option<bool>,
}
