use anyhow::Result;
use menv::ui::Table;
use menv::{Config, ConfigStore, Project};

pub(crate) fn run_list(store: &ConfigStore, project_name: &str) -> Result<()> {
    let cfg = store.load()?;
    let project = cfg.project(project_name)?;

    if project.envs.is_empty() {
        menv::log_warn_stderr(
            menv::color_enabled_stderr(),
            &format!(
                "No environments configured for {project_name:?}. Use 'menv env add' to add one."
            ),
        );
        return Ok(());
    }

    let mut table = Table::new(["ENV", "FILES", "OVERRIDES"]);
    for (name, env) in &project.envs {
        let overrides: Vec<String> = env
            .overrides
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        table.row([name.clone(), env.files.join(", "), overrides.join(", ")]);
    }
    table.print();
    Ok(())
}

pub(crate) fn run_add(
    store: &ConfigStore,
    project: &str,
    env: &str,
    files: &[String],
    overrides: &[String],
) -> Result<()> {
    let overrides = menv::parse_overrides(overrides)?;
    let mut cfg = store.load()?;
    cfg.add_env(project, env, files.to_vec(), overrides)?;
    store.save(&cfg)?;
    menv::print_success(&format!(
        "Environment {env:?} added to project {project:?}."
    ));
    Ok(())
}

pub(crate) fn run_remove(store: &ConfigStore, project: &str, env: &str) -> Result<()> {
    let mut cfg = store.load()?;
    cfg.remove_env(project, env)?;
    store.save(&cfg)?;
    menv::print_success(&format!(
        "Environment {env:?} removed from project {project:?}."
    ));
    Ok(())
}

/// Split `[project] env [key...]`: the first word is a project only when it names
/// one and an env follows it; otherwise the project comes from the current directory.
fn split_get_args<'a>(
    cfg: &'a Config,
    args: &'a [String],
) -> Result<(String, &'a Project, &'a str, &'a [String])> {
    let explicit = args.len() >= 2 && cfg.projects.contains_key(&args[0]);
    if explicit {
        let (name, project) = cfg.resolve_project(Some(args[0].as_str()))?;
        Ok((name, project, args[1].as_str(), &args[2..]))
    } else {
        let (name, project) = cfg.resolve_project(None)?;
        Ok((name, project, args[0].as_str(), &args[1..]))
    }
}

pub(crate) fn run_get(store: &ConfigStore, args: &[String], export: bool) -> Result<()> {
    if args.is_empty() {
        return Err(menv::MenvError::invalid("expected [project] <env> [key...]").into());
    }
    let cfg = store.load()?;
    let (project_name, project, env_name, keys) = split_get_args(&cfg, args)?;
    let env = project.env(&project_name, env_name)?;
    let loaded = menv::load_env_with_sources(project, env)?;

    if !keys.is_empty() {
        for k in keys {
            match loaded.vars.get(k) {
                Some(v) => println!("{}", format_var(k, v, export)),
                None => menv::log_warn_stderr(
                    menv::color_enabled_stderr(),
                    &format!("# {k} not set"),
                ),
            }
        }
        return Ok(());
    }

    if export {
        for (k, v) in &loaded.vars {
            println!("{}", format_var(k, v, true));
        }
        return Ok(());
    }

    menv::log_info_stderr(
        menv::color_enabled_stderr(),
        &format!("» project: {project_name} | env: {env_name}"),
    );
    let mut table = Table::new(["KEY", "VALUE", "SOURCE"]);
    for (k, v) in &loaded.vars {
        let source = loaded
            .sources
            .get(k)
            .map(ToString::to_string)
            .unwrap_or_default();
        table.row([k.clone(), v.clone(), source]);
    }
    table.print();
    Ok(())
}

/// `KEY=value`, or `export KEY='value'` (shell-quoted so `eval` sees the literal value).
fn format_var(key: &str, value: &str, export: bool) -> String {
    if export {
        format!("export {key}={}", menv::shell_escape(value))
    } else {
        format!("{key}={value}")
    }
}
