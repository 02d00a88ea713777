//! Child process execution with a fully specified environment.
//!
//! The child inherits stdin/stdout/stderr and is waited on synchronously. Its
//! environment is exactly the `KEY=VALUE` list handed in; nothing else leaks
//! through from this process.

use std::path::PathBuf;
use std::process::Command;

use crate::errors::MenvError;

/// How command parts become a process.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Join parts with spaces and hand the line to `sh -c` (`cmd /C` on Windows).
    /// Pipes, globs and `$VARS` work; quoting is the caller's job.
    #[default]
    Shell,
    /// Run the first part as the program and pass the rest as literal arguments.
    Direct,
}

/// Run `parts` through the platform shell. A non-zero exit is returned as
/// [`MenvError::CommandFailed`].
pub fn run(parts: &[String], env: &[String], work_dir: &str) -> Result<(), MenvError> {
    run_with_mode(ExecMode::Shell, parts, env, work_dir)
}

pub fn run_with_mode(
    mode: ExecMode,
    parts: &[String],
    env: &[String],
    work_dir: &str,
) -> Result<(), MenvError> {
    let mut cmd = build_command(mode, parts, env, work_dir)?;
    tracing::debug!(?mode, program = ?cmd.get_program(), dir = work_dir, "spawning command");

    let status = cmd.status().map_err(|source| MenvError::Spawn {
        program: cmd.get_program().to_string_lossy().into_owned(),
        dir: spawn_dir(work_dir),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        tracing::debug!(%status, "command exited unsuccessfully");
        Err(MenvError::CommandFailed(status))
    }
}

/// Prepare (but do not start) the command for `parts`.
pub fn build_command(
    mode: ExecMode,
    parts: &[String],
    env: &[String],
    work_dir: &str,
) -> Result<Command, MenvError> {
    let Some((first, rest)) = parts.split_first() else {
        return Err(MenvError::invalid("no command provided"));
    };

    let mut cmd = match mode {
        ExecMode::Shell => shell_command(&shell_line(parts)),
        ExecMode::Direct => {
            let mut c = Command::new(first);
            c.args(rest);
            c
        }
    };

    cmd.env_clear();
    for entry in env {
        if let Some((k, v)) = entry.split_once('=') {
            if !k.is_empty() {
                cmd.env(k, v);
            }
        }
    }
    if !work_dir.is_empty() {
        cmd.current_dir(work_dir);
    }
    Ok(cmd)
}

/// The single command line handed to the shell.
pub fn shell_line(parts: &[String]) -> String {
    parts.join(" ")
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").arg(line);
    c
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(line);
    c
}

fn spawn_dir(work_dir: &str) -> PathBuf {
    if work_dir.is_empty() {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    } else {
        PathBuf::from(work_dir)
    }
}
