//! Error mapping guide:
//! - Map a failed child to its own exit code (128+signal when it was killed).
//! - Map io::ErrorKind::NotFound on spawn to exit code 127; all others to 1.
//! - Keep Display texts short and actionable: always name the project, env or path involved.
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

/// Coarse classification used by callers that only care about the failure family.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    NotFound,
    FileError,
    InvalidArgument,
    Config,
    Subprocess,
}

#[derive(Debug, Error)]
pub enum MenvError {
    #[error("project {0:?} not found")]
    ProjectNotFound(String),

    #[error("environment {env:?} not found in project {project:?}")]
    EnvNotFound { project: String, env: String },

    #[error(
        "could not detect project from current directory; specify a project name or cd into a project path"
    )]
    ProjectNotDetected,

    #[error("project {0:?} already exists")]
    ProjectExists(String),

    #[error("environment {env:?} already exists in project {project:?}")]
    EnvExists { project: String, env: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("failed to load env file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write config file {}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerialize(#[source] serde_yaml::Error),

    #[error("could not determine home directory; pass --config or set MENV_CONFIG")]
    NoConfigPath,

    #[error("failed to start {program} in {}", dir.display())]
    Spawn {
        program: String,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("command failed: {0}")]
    CommandFailed(ExitStatus),
}

impl MenvError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        MenvError::InvalidArgument(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MenvError::ProjectNotFound(_)
            | MenvError::EnvNotFound { .. }
            | MenvError::ProjectNotDetected => ErrorKind::NotFound,
            MenvError::EnvFile { .. } => ErrorKind::FileError,
            MenvError::InvalidArgument(_)
            | MenvError::ProjectExists(_)
            | MenvError::EnvExists { .. } => ErrorKind::InvalidArgument,
            MenvError::ConfigRead { .. }
            | MenvError::ConfigParse { .. }
            | MenvError::ConfigWrite { .. }
            | MenvError::ConfigSerialize(_)
            | MenvError::NoConfigPath => ErrorKind::Config,
            MenvError::Spawn { .. } | MenvError::CommandFailed(_) => ErrorKind::Subprocess,
        }
    }

    /// True when the config file itself is missing (the user probably never ran `menv init`).
    pub fn is_missing_config(&self) -> bool {
        matches!(self, MenvError::ConfigRead { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MenvError::CommandFailed(status) => exit_code_for_status(status),
            MenvError::Spawn { source, .. } => exit_code_for_io_error(source),
            _ => 1,
        }
    }
}

/// Exit code to propagate for a finished child: its own code, or 128+signal on unix.
pub fn exit_code_for_status(status: &ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        // Exit codes outside u8 (Windows) collapse to a generic failure.
        return u8::try_from(code).unwrap_or(1);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128u8.saturating_add(u8::try_from(sig).unwrap_or(0));
        }
    }
    1
}
