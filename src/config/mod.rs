// src/config/mod.rs

//! Settings file loading, validation and resolution for extproc.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).
//! - Merge CLI flags, presets and defaults into an `InvocationRequest`
//!   (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{
    LoadedConfig, default_config_path, load_and_validate, load_from_path, load_optional,
};
pub use model::{CommandConfig, ConfigFile, DefaultsSection, RawConfigFile};
pub use settings::{first_value, resolve_request};
