#![allow(clippy::module_name_repetitions)]
//! Best-effort path normalization: `~` expansion, absolute form, symlink resolution.
//!
//! Normalization never fails outward. Anything that had to be skipped along the
//! way is reported as a [`PathNote`] by [`normalize_path_reported`] and logged at
//! debug level by [`normalize_path`].

use std::path::{Component, Path, PathBuf};

/// Something normalization had to work around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathNote {
    /// `~` could not be expanded; the literal path was used.
    HomeUnavailable,
    /// The current directory could not be read; the input was returned as given.
    CurrentDirUnavailable,
    /// Symlinks could not be resolved (usually: the path does not exist yet).
    Unresolved { path: String, reason: String },
}

/// Normalized path plus the notes collected while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub path: String,
    pub notes: Vec<PathNote>,
}

/// Resolve `p` to an absolute, symlink-resolved path. Empty input stays empty.
pub fn normalize_path(p: &str) -> String {
    let out = normalize_path_reported(p);
    for note in &out.notes {
        tracing::debug!(input = p, note = ?note, "path normalization fallback");
    }
    out.path
}

/// Like [`normalize_path`] but returns the fallback notes instead of logging them.
pub fn normalize_path_reported(p: &str) -> Normalized {
    let cwd = std::env::current_dir().ok();
    let home = home::home_dir();
    normalize_path_with(p, cwd.as_deref(), home.as_deref())
}

/// Normalization against an explicit working directory and home directory.
pub fn normalize_path_with(p: &str, cwd: Option<&Path>, home: Option<&Path>) -> Normalized {
    let mut notes = Vec::new();
    if p.is_empty() {
        return Normalized {
            path: String::new(),
            notes,
        };
    }

    let mut expanded = PathBuf::from(p);
    if let Some(rest) = tilde_rest(p) {
        match home {
            Some(h) if rest.is_empty() => expanded = h.to_path_buf(),
            Some(h) => expanded = h.join(rest),
            None => notes.push(PathNote::HomeUnavailable),
        }
    }

    let abs = if expanded.is_absolute() {
        clean_lexical(&expanded)
    } else {
        match cwd {
            Some(dir) => clean_lexical(&dir.join(&expanded)),
            None => {
                notes.push(PathNote::CurrentDirUnavailable);
                return Normalized {
                    path: p.to_string(),
                    notes,
                };
            }
        }
    };

    let path = match std::fs::canonicalize(&abs) {
        Ok(resolved) => resolved,
        Err(e) => {
            notes.push(PathNote::Unresolved {
                path: abs.display().to_string(),
                reason: e.to_string(),
            });
            abs
        }
    };

    Normalized {
        path: path.to_string_lossy().into_owned(),
        notes,
    }
}

/// For `~`, `~/x` and `~\x` return the part after the tilde prefix.
fn tilde_rest(p: &str) -> Option<&str> {
    if p == "~" {
        return Some("");
    }
    p.strip_prefix("~/").or_else(|| p.strip_prefix("~\\"))
}

/// Drop `.` components and fold `..` without touching the filesystem.
fn clean_lexical(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in p.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never climb above the root/prefix.
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if !at_root {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
