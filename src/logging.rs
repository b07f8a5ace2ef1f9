//! Diagnostic logging on stderr via `tracing`.
//!
//! Filter precedence: `KPIVIEW_LOG` env var, then `-v` (debug), then the
//! `log_level` key of the config file.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "KPIVIEW_LOG";

pub fn filter_directive(verbose: bool, configured: &str) -> String {
    if let Ok(env) = std::env::var(LOG_ENV)
        && !env.trim().is_empty()
    {
        return env;
    }
    if verbose {
        "kpiview=debug".to_string()
    } else {
        configured.to_string()
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_new(filter_directive(verbose, configured))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
