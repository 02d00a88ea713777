use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ProjectCmd {
    /// List all configured projects
    #[command(alias = "ls")]
    List,

    /// Add a new project
    Add {
        /// Project name
        name: String,
        /// Project root directory
        #[arg(long, default_value = ".")]
        path: String,
        /// Default run command
        #[arg(long, default_value = "")]
        command: String,
    },

    /// Remove a project
    #[command(alias = "rm")]
    Remove {
        /// Project name
        name: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum EnvCmd {
    /// List environments for a project
    #[command(alias = "ls")]
    List {
        /// Project name
        project: String,
    },

    /// Add an environment to a project
    Add {
        project: String,
        env: String,
        /// Env files, relative to the project root or absolute (comma-separated or repeated)
        #[arg(long = "files", short = 'f', value_delimiter = ',')]
        files: Vec<String>,
        /// Overrides as KEY=VALUE (comma-separated or repeated)
        #[arg(long = "override", short = 'o', value_delimiter = ',')]
        overrides: Vec<String>,
    },

    /// Remove an environment from a project
    #[command(alias = "rm")]
    Remove { project: String, env: String },

    /// Print environment variables for a project/env
    #[command(
        override_usage = "menv env get [PROJECT] <ENV> [KEY]...",
        after_long_help = "If the first argument is not a project name, the project is detected from the current directory.\n\nExamples:\n  menv env get my-app dev\n  menv env get dev\n  menv env get dev DB_HOST API_KEY\n  eval \"$(menv env get dev --export)\"\n"
    )]
    Get {
        /// [PROJECT] ENV [KEY]...
        #[arg(value_name = "ARGS", required = true, num_args = 1..)]
        args: Vec<String>,
        /// Output in export format (for eval)
        #[arg(long, short = 'x')]
        export: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Create a config file with a sample project
    Init,

    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        cmd: ProjectCmd,
    },

    /// Manage environments for a project
    #[command(alias = "e")]
    Env {
        #[command(subcommand)]
        cmd: EnvCmd,
    },

    /// Run a command with environment variables loaded
    #[command(
        override_usage = "menv run [PROJECT] <ENV> [-- <COMMAND>...]",
        after_long_help = "Without a command after --, the project's default command is used.\nWith a single positional argument, the project is detected from the current directory.\n\nExamples:\n  menv run my-app dev\n  menv run dev\n  menv run my-app dev -- npm run build\n  menv run dev -- npm run build\n"
    )]
    Run {
        /// [PROJECT] ENV
        #[arg(value_name = "TARGET", required = true, num_args = 1..=2)]
        targets: Vec<String>,
        /// Print what would run, but do not execute
        #[arg(long)]
        dry_run: bool,
        /// Execute the command directly instead of through sh -c / cmd /C
        #[arg(long)]
        no_shell: bool,
        /// Command and arguments (after --)
        #[arg(last = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "menv",
    version,
    about = "menv - manage project environments from the terminal",
    long_about = "Configure projects, define environments with .env files and overrides,\nthen run your commands with the correct env vars populated.",
    after_long_help = "Examples:\n  menv project add my-app --path ./my-app --command \"npm start\"\n  menv env add my-app dev --files .env.dev\n  menv run my-app dev -- npm start\n"
)]
pub(crate) struct Cli {
    /// Config file (default: $MENV_CONFIG or ~/.menv.yaml)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Colorize output: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    pub(crate) color: Option<menv::ColorMode>,

    /// Print debug diagnostics to stderr (MENV_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_splits_targets_and_command() {
        let cli = Cli::try_parse_from(["menv", "run", "demo", "dev", "--", "echo", "a b"]).unwrap();
        match cli.command {
            Command::Run {
                targets, command, ..
            } => {
                assert_eq!(targets, vec!["demo", "dev"]);
                assert_eq!(command, vec!["echo", "a b"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_env_add_delimited_lists() {
        let cli = Cli::try_parse_from([
            "menv", "e", "add", "app", "dev", "-f", ".env,.env.dev", "-o", "A=1", "-o", "B=2",
        ])
        .unwrap();
        match cli.command {
            Command::Env {
                cmd: EnvCmd::Add {
                    files, overrides, ..
                },
            } => {
                assert_eq!(files, vec![".env", ".env.dev"]);
                assert_eq!(overrides, vec!["A=1", "B=2"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
