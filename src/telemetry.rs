//! Diagnostic logging via `tracing`.
//!
//! User-facing output goes through `color`; this is for `-v` / `MENV_LOG` debugging.
//! Filter precedence: `MENV_LOG` (EnvFilter syntax), then `menv=debug` with
//! `--verbose`, else `menv=warn`. Everything is written to stderr.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "MENV_LOG";

static INIT: OnceCell<()> = OnceCell::new();

fn filter_directive(verbose: bool) -> String {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            if verbose {
                "menv=debug".to_string()
            } else {
                "menv=warn".to_string()
            }
        })
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool, use_color: bool) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directive(verbose))
            .unwrap_or_else(|_| EnvFilter::new("menv=warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(use_color)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
