use std::fs::OpenOptions;

use tracing_subscriber::EnvFilter;

/// Env var holding the log filter for CLI runs (stderr output).
pub const LOG_ENV: &str = "NIPPO_LOG";
/// Env var naming a log file for TUI runs. The TUI owns the terminal, so it
/// never logs to stdout/stderr.
pub const LOG_FILE_ENV: &str = "NIPPO_LOG_FILE";

/// Initialize stderr logging for CLI subcommands. No-op unless NIPPO_LOG is set.
pub fn init_cli() {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize file logging for the TUI. No-op unless NIPPO_LOG_FILE is set;
/// the filter still comes from NIPPO_LOG (default "debug").
pub fn init_tui() {
    let Ok(path) = std::env::var(LOG_FILE_ENV) else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| "debug".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
