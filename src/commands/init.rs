use anyhow::{Context, Result};
use menv::{Config, ConfigStore};

pub(crate) fn run_init(store: &ConfigStore) -> Result<()> {
    let use_err = menv::color_enabled_stderr();
    if store.exists() {
        menv::log_warn_stderr(
            use_err,
            &format!("Config file already exists at {}", store.path().display()),
        );
        return Ok(());
    }

    store
        .save(&Config::sample())
        .context("failed to create config")?;

    menv::print_success(&format!(
        "Config file created at {}",
        store.path().display()
    ));
    menv::log_info_stderr(use_err, "  Edit it to add your projects and environments.");
    Ok(())
}
