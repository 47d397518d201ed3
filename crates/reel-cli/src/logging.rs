//! Logging setup
//!
//! The filter comes from REEL_LOG when set (a level such as `debug`, or
//! full `target=level` directives), otherwise `debug` with --verbose and
//! `warn` without. Logs go to stderr, or to `log_file` when the configuration
//! names one.

use std::fs::OpenOptions;
use std::sync::Mutex;

use reel_core::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(config: &Config, verbose: bool) {
    let env_filter = EnvFilter::new(filter_directives(std::env::var("REEL_LOG").ok(), verbose));

    if let Some(log_path) = &config.log_file {
        match OpenOptions::new().create(true).append(true).open(log_path) {
            Ok(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
                debug!("Logging to {:?}", log_path);
                return;
            }
            Err(e) => {
                eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
            }
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn filter_directives(reel_log: Option<String>, verbose: bool) -> String {
    match reel_log.as_deref().map(str::trim) {
        // Full directives such as `reel_core=trace,warn` are used as given
        Some(directives) if directives.contains('=') => directives.to_string(),
        Some(level) if !level.is_empty() => format!("reel_core={0},reel={0}", level),
        _ if verbose => "reel_core=debug,reel=debug".to_string(),
        _ => "warn".to_string(),
    }
}
