//! Subcommand handlers. Each one loads what it needs from the config store,
//! calls into the library and prints; errors bubble up to `main` for reporting.

mod env;
mod init;
mod project;
mod run;

use anyhow::Result;
use menv::ConfigStore;

use crate::cli::{Cli, Command, EnvCmd, ProjectCmd};

pub(crate) fn dispatch(cli: &Cli, store: &ConfigStore) -> Result<()> {
    match &cli.command {
        Command::Init => init::run_init(store),
        Command::Project { cmd } => match cmd {
            ProjectCmd::List => project::run_list(store),
            ProjectCmd::Add {
                name,
                path,
                command,
            } => project::run_add(store, name, path, command),
            ProjectCmd::Remove { name } => project::run_remove(store, name),
        },
        Command::Env { cmd } => match cmd {
            EnvCmd::List { project } => env::run_list(store, project),
            EnvCmd::Add {
                project,
                env,
                files,
                overrides,
            } => env::run_add(store, project, env, files, overrides),
            EnvCmd::Remove { project, env } => env::run_remove(store, project, env),
            EnvCmd::Get { args, export } => env::run_get(store, args, *export),
        },
        Command::Run {
            targets,
            dry_run,
            no_shell,
            command,
        } => run::run_command(
            store,
            &run::RunArgs {
                targets,
                command,
                dry_run: *dry_run,
                no_shell: *no_shell,
            },
        ),
    }
}
