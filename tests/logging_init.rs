// tests/logging_init.rs
//
// Kept in its own test binary: it installs the process-wide subscriber.

use extproc::cli::LogLevel;
use extproc::logging::init_logging;

#[test]
fn second_initialisation_reports_an_error() {
    init_logging(Some(LogLevel::Warn)).expect("first subscriber installs");

    let err = init_logging(None).expect_err("global subscriber is already set");
    assert!(err.to_string().contains("installing tracing subscriber"));
}
