//! menv: per-project environments for shell commands.
//!
//! A project is a root directory plus a default command; each project has named
//! environments made of `.env` files and literal overrides. The pipeline is:
//!
//! 1. find the project ([`Config::resolve_project`], [`detect_project`]),
//! 2. load its environment ([`load_env`]: files in order, then overrides),
//! 3. lay the result over the inherited process environment ([`build_env`]),
//! 4. run the command in the project root with exactly that environment ([`run`]).

pub mod color;
pub mod config;
pub mod dotenv;
pub mod errors;
pub mod loader;
pub mod paths;
pub mod runner;
pub mod telemetry;
pub mod ui;
pub mod util;

use std::collections::BTreeMap;

/// Variable name to value. Ordered so listings and snapshots are stable.
pub type EnvMap = BTreeMap<String, String>;

pub use color::{
    color_enabled_stderr, color_enabled_stdout, log_error_stderr, log_hint_stderr,
    log_info_stderr, log_warn_stderr, paint, print_success, set_color_mode, ColorMode,
};
pub use config::{
    detect_project, detect_project_from, parse_overrides, Config, ConfigStore, Environment,
    Project,
};
pub use dotenv::{parse_env_file, parse_env_str};
pub use errors::{exit_code_for_io_error, exit_code_for_status, ErrorKind, MenvError};
pub use loader::{
    build_env, build_env_from, load_env, load_env_with_sources, resolve_env_file, LoadedEnv,
    VarSource,
};
pub use paths::{normalize_path, normalize_path_reported, Normalized, PathNote};
pub use runner::{build_command, run, run_with_mode, shell_line, ExecMode};
pub use ui::warn_print;
pub use util::{shell_escape, shell_join, split_command_line, strip_outer_quotes};
