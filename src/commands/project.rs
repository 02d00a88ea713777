use anyhow::Result;
use menv::ui::Table;
use menv::ConfigStore;

pub(crate) fn run_list(store: &ConfigStore) -> Result<()> {
    let cfg = store.load()?;
    if cfg.projects.is_empty() {
        menv::log_warn_stderr(
            menv::color_enabled_stderr(),
            "No projects configured. Use 'menv project add' to add one.",
        );
        return Ok(());
    }

    let mut table = Table::new(["PROJECT", "PATH", "COMMAND", "ENVS"]);
    for (name, p) in &cfg.projects {
        let envs: Vec<&str> = p.envs.keys().map(String::as_str).collect();
        table.row([
            name.clone(),
            p.path.clone(),
            p.command.clone(),
            format!("[{}]", envs.join(" ")),
        ]);
    }
    table.print();
    Ok(())
}

pub(crate) fn run_add(store: &ConfigStore, name: &str, path: &str, command: &str) -> Result<()> {
    let mut cfg = store.load()?;
    let root = cfg.add_project(name, path, command)?.path.clone();

    let overlaps = cfg.overlapping_projects(name, &root);
    if !overlaps.is_empty() {
        menv::warn_print(&format!(
            "project root {} overlaps with {}; detection prefers the most specific root",
            root,
            overlaps.join(", ")
        ));
    }

    store.save(&cfg)?;
    menv::print_success(&format!("Project {name:?} added."));
    Ok(())
}

pub(crate) fn run_remove(store: &ConfigStore, name: &str) -> Result<()> {
    let mut cfg = store.load()?;
    cfg.remove_project(name)?;
    store.save(&cfg)?;
    menv::print_success(&format!("Project {name:?} removed."));
    Ok(())
}
