use std::path::MAIN_SEPARATOR;

use super::types::{Config, Project};
use crate::paths::normalize_path;

/// Find the project whose root contains the current working directory.
///
/// Returns `None` when the working directory cannot be read or no root matches.
pub fn detect_project(config: &Config) -> Option<(&str, &Project)> {
    let cwd = std::env::current_dir().ok()?;
    detect_project_from(config, &cwd.to_string_lossy())
}

/// Detection against an explicit working directory.
///
/// A root matches when `cwd` equals it or is nested under it (the prefix must be
/// followed by a path separator, so `/a/app2` is not inside `/a/app`). With
/// overlapping roots the longest (most specific) one wins; ties go to the first
/// name in sorted order.
pub fn detect_project_from<'a>(config: &'a Config, cwd: &str) -> Option<(&'a str, &'a Project)> {
    let cwd = normalize_path(cwd);
    if cwd.is_empty() {
        return None;
    }

    let mut best: Option<(&'a str, &'a Project, usize)> = None;
    for (name, project) in &config.projects {
        let root = normalize_path(&project.path);
        if root.is_empty() || !is_within(&cwd, &root) {
            continue;
        }
        if best.map_or(true, |(_, _, len)| root.len() > len) {
            best = Some((name.as_str(), project, root.len()));
        }
    }

    match best {
        Some((name, project, _)) => {
            tracing::debug!(project = name, cwd = %cwd, "detected project");
            Some((name, project))
        }
        None => {
            tracing::debug!(cwd = %cwd, "no project matches current directory");
            None
        }
    }
}

fn is_within(cwd: &str, root: &str) -> bool {
    if cwd == root {
        return true;
    }
    cwd.strip_prefix(root)
        .is_some_and(|rest| rest.starts_with(MAIN_SEPARATOR))
}
