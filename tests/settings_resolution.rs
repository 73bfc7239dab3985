// tests/settings_resolution.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tempfile::NamedTempFile;

use extproc::cli::CliArgs;
use extproc::config::{LoadedConfig, first_value, load_and_validate, load_optional, resolve_request};
use extproc::errors::ExtprocError;

type TestResult = Result<(), Box<dyn Error>>;

const SETTINGS: &str = r#"
[defaults]
ensure_success = false
working_dir = "work"

[command.restore]
cmd = "dotnet"
args = "restore --no-cache"
dir = "src"
ensure_success = true

[command.status]
cmd = "git"
args = "status --short"
"#;

fn write_settings(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn loaded(contents: &str) -> (NamedTempFile, LoadedConfig) {
    let file = write_settings(contents);
    let cfg = load_and_validate(file.path()).unwrap();
    (file, cfg)
}

fn cli(argv: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("extproc").chain(argv.iter().copied()))
}

#[test]
fn first_value_prefers_earliest_present() {
    assert_eq!(first_value([None, Some(2), Some(3)], 9), 2);
    assert_eq!(first_value([Some(1), None], 9), 1);
    assert_eq!(first_value::<i32>([None, None], 9), 9);
}

#[test]
fn plain_cli_invocation_uses_builtin_defaults() -> TestResult {
    let request = resolve_request(&cli(&["git", "--args", "log -1"]), None)?;

    assert_eq!(request.command, "git");
    assert_eq!(request.arguments, "log -1");
    assert_eq!(request.working_dir, PathBuf::from("."));
    assert!(request.ensure_success);
    Ok(())
}

#[test]
fn preset_values_fill_in_and_resolve_relative_to_settings_file() -> TestResult {
    let (file, cfg) = loaded(SETTINGS);
    let root = file.path().parent().unwrap().to_path_buf();

    let request = resolve_request(&cli(&["--preset", "restore"]), Some(&cfg))?;

    assert_eq!(request.command, "dotnet");
    assert_eq!(request.arguments, "restore --no-cache");
    assert_eq!(request.working_dir, root.join("src"));
    assert!(request.ensure_success);
    Ok(())
}

#[test]
fn defaults_apply_when_preset_is_silent() -> TestResult {
    let (file, cfg) = loaded(SETTINGS);
    let root = file.path().parent().unwrap().to_path_buf();

    let request = resolve_request(&cli(&["--preset", "status"]), Some(&cfg))?;

    assert_eq!(request.working_dir, root.join("work"));
    assert!(!request.ensure_success);
    Ok(())
}

#[test]
fn cli_flags_override_preset_and_defaults() -> TestResult {
    let (_file, cfg) = loaded(SETTINGS);

    let request = resolve_request(
        &cli(&[
            "--preset",
            "restore",
            "--args",
            "restore --locked-mode",
            "--dir",
            "/tmp/elsewhere",
            "--allow-failure",
        ]),
        Some(&cfg),
    )?;

    assert_eq!(request.command, "dotnet");
    assert_eq!(request.arguments, "restore --locked-mode");
    assert_eq!(request.working_dir, PathBuf::from("/tmp/elsewhere"));
    assert!(!request.ensure_success);
    Ok(())
}

#[test]
fn unknown_preset_is_a_config_error() {
    let (_file, cfg) = loaded(SETTINGS);

    match resolve_request(&cli(&["--preset", "publish"]), Some(&cfg)) {
        Err(ExtprocError::ConfigError(msg)) => assert!(msg.contains("publish")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn preset_without_settings_file_is_a_config_error() {
    let result = resolve_request(&cli(&["--preset", "restore"]), None);
    assert!(matches!(result, Err(ExtprocError::ConfigError(_))));
}

#[test]
fn missing_command_is_a_config_error() {
    match resolve_request(&cli(&["--args", "status"]), None) {
        Err(ExtprocError::ConfigError(msg)) => assert!(msg.contains("no command")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn empty_preset_cmd_fails_validation() {
    let file = write_settings(
        r#"
[command.broken]
cmd = "  "
"#,
    );

    match load_and_validate(file.path()) {
        Err(ExtprocError::ConfigError(msg)) => {
            assert!(msg.contains("[command.broken].cmd"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_default_working_dir_fails_validation() {
    let file = write_settings(
        r#"
[defaults]
working_dir = ""
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(ExtprocError::ConfigError(_))
    ));
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let file = write_settings("[command.x\ncmd = ");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(ExtprocError::TomlError(_))
    ));
}

#[test]
fn explicit_missing_settings_file_is_an_error() {
    let result = load_optional(Some("/definitely/not/here/Extproc.toml"));
    assert!(matches!(result, Err(ExtprocError::ConfigError(_))));
}
