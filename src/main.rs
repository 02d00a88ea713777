use clap::Parser;
use std::process::ExitCode;

use menv::{ConfigStore, MenvError};

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        menv::set_color_mode(mode);
    }
    let use_err = menv::color_enabled_stderr();
    menv::telemetry::init(cli.verbose, use_err);

    let result = ConfigStore::resolve(cli.config.clone())
        .map_err(anyhow::Error::from)
        .and_then(|store| {
            tracing::debug!(config = %store.path().display(), "using config file");
            commands::dispatch(&cli, &store)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e, use_err),
    }
}

fn report_error(e: &anyhow::Error, use_err: bool) -> ExitCode {
    let menv_err = e.downcast_ref::<MenvError>();
    match menv_err {
        // The child already had the terminal; only note how it ended.
        Some(MenvError::CommandFailed(status)) => {
            menv::log_hint_stderr(use_err, &format!("menv: command exited ({status})"));
        }
        _ => {
            menv::log_error_stderr(use_err, &format!("error: {e:#}"));
            if menv_err.is_some_and(MenvError::is_missing_config) {
                menv::log_hint_stderr(use_err, "Run 'menv init' to create a config file.");
            }
        }
    }
    ExitCode::from(menv_err.map_or(1, MenvError::exit_code))
}
