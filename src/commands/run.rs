use anyhow::Result;
use menv::{ConfigStore, ExecMode, MenvError};

pub(crate) struct RunArgs<'a> {
    pub(crate) targets: &'a [String],
    pub(crate) command: &'a [String],
    pub(crate) dry_run: bool,
    pub(crate) no_shell: bool,
}

pub(crate) fn run_command(store: &ConfigStore, args: &RunArgs<'_>) -> Result<()> {
    let cfg = store.load()?;

    let (project_name, project, env_name) = match args.targets {
        [env] => {
            let (name, project) = cfg.resolve_project(None)?;
            (name, project, env.as_str())
        }
        [project, env] => {
            let (name, project) = cfg.resolve_project(Some(project.as_str()))?;
            (name, project, env.as_str())
        }
        other => {
            return Err(MenvError::invalid(format!(
                "expected 1 or 2 positional arguments (env or project env), got {}",
                other.len()
            ))
            .into())
        }
    };
    let env = project.env(&project_name, env_name)?;

    let mode = if args.no_shell {
        ExecMode::Direct
    } else {
        ExecMode::Shell
    };
    let parts = command_parts(mode, args.command, &project.command).ok_or_else(|| {
        MenvError::invalid(format!(
            "no command provided and no default command configured for project {project_name:?}"
        ))
    })?;

    let loaded = menv::load_env(project, env)?;
    let env_vars = menv::build_env(&loaded);

    let use_err = menv::color_enabled_stderr();
    menv::log_info_stderr(
        use_err,
        &format!("» project: {project_name} | env: {env_name}"),
    );
    menv::log_info_stderr(use_err, &format!("» directory: {}", project.path));
    if !loaded.is_empty() {
        menv::log_hint_stderr(
            use_err,
            &format!("  loaded {} env variable(s)", loaded.len()),
        );
    }
    menv::log_info_stderr(use_err, &format!("» running: {}", preview(mode, &parts)));
    eprintln!();

    if args.dry_run {
        menv::log_hint_stderr(use_err, "menv: dry-run requested; not executing.");
        return Ok(());
    }

    menv::run_with_mode(mode, &parts, &env_vars, &project.path)?;
    Ok(())
}

/// The explicit command if given, else the project's default command line.
///
/// In direct mode the default line is split into words, since there is no shell
/// to do it.
fn command_parts(mode: ExecMode, explicit: &[String], default: &str) -> Option<Vec<String>> {
    if !explicit.is_empty() {
        return Some(explicit.to_vec());
    }
    if default.trim().is_empty() {
        return None;
    }
    match mode {
        ExecMode::Shell => Some(vec![default.to_string()]),
        ExecMode::Direct => Some(menv::split_command_line(default)),
    }
}

fn preview(mode: ExecMode, parts: &[String]) -> String {
    match mode {
        ExecMode::Shell => menv::shell_line(parts),
        ExecMode::Direct => menv::shell_join(parts),
    }
}
