//! Environment loading (files + overrides) and process environment construction.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{Environment, Project};
use crate::dotenv::parse_env_file;
use crate::errors::MenvError;
use crate::EnvMap;

/// Where a loaded variable's final value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarSource {
    File(PathBuf),
    Override,
}

impl std::fmt::Display for VarSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarSource::File(p) => write!(f, "{}", p.display()),
            VarSource::Override => f.write_str("override"),
        }
    }
}

/// Loaded variables plus the source that won for each key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedEnv {
    pub vars: EnvMap,
    pub sources: BTreeMap<String, VarSource>,
}

/// Load an environment: every file in list order (later files win), then the overrides.
///
/// Relative file references resolve against the project root. The first file
/// that cannot be read aborts the load; no partial result is returned.
pub fn load_env(project: &Project, env: &Environment) -> Result<EnvMap, MenvError> {
    load_env_with_sources(project, env).map(|loaded| loaded.vars)
}

/// [`load_env`] that also records which file (or override) each value came from.
pub fn load_env_with_sources(project: &Project, env: &Environment) -> Result<LoadedEnv, MenvError> {
    let mut loaded = LoadedEnv::default();

    for file in &env.files {
        let path = resolve_env_file(&project.path, file);
        for (key, value) in parse_env_file(&path)? {
            loaded
                .sources
                .insert(key.clone(), VarSource::File(path.clone()));
            loaded.vars.insert(key, value);
        }
    }

    for (key, value) in &env.overrides {
        validate_key(key)?;
        loaded.sources.insert(key.clone(), VarSource::Override);
        loaded.vars.insert(key.clone(), value.clone());
    }

    tracing::debug!(
        project = %project.path,
        files = env.files.len(),
        overrides = env.overrides.len(),
        vars = loaded.vars.len(),
        "loaded environment"
    );
    Ok(loaded)
}

/// Path of an env file reference as seen from `root`.
pub fn resolve_env_file(root: &str, file: &str) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        Path::new(root).join(p)
    }
}

/// Current process environment with `loaded` applied on top, as `KEY=VALUE` entries.
pub fn build_env(loaded: &EnvMap) -> Vec<String> {
    let inherited = std::env::vars_os().filter_map(|(k, v)| {
        match (k.into_string(), v.into_string()) {
            (Ok(k), Ok(v)) => Some(format!("{k}={v}")),
            (k, _) => {
                tracing::debug!(key = ?k, "skipping non UTF-8 inherited variable");
                None
            }
        }
    });
    build_env_from(inherited, loaded)
}

/// Merge `loaded` over explicit `KEY=VALUE` base entries.
///
/// Base entries split on the first `=`; entries without one, or with an empty
/// key, are ignored. Output is sorted by key.
pub fn build_env_from<I, S>(base: I, loaded: &EnvMap) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged = EnvMap::new();
    for entry in base {
        if let Some((k, v)) = entry.as_ref().split_once('=') {
            if !k.is_empty() {
                merged.insert(k.to_string(), v.to_string());
            }
        }
    }
    for (k, v) in loaded {
        if k.is_empty() {
            continue;
        }
        merged.insert(k.clone(), v.clone());
    }
    merged.into_iter().map(|(k, v)| format!("{k}={v}")).collect()
}

fn validate_key(key: &str) -> Result<(), MenvError> {
    if key.is_empty() || key.contains('=') || key.contains('\0') {
        return Err(MenvError::invalid(format!(
            "invalid variable name {key:?} in overrides"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_env_file() {
        #[cfg(unix)]
        {
            assert_eq!(
                resolve_env_file("/srv/app", ".env"),
                PathBuf::from("/srv/app/.env")
            );
            assert_eq!(
                resolve_env_file("/srv/app", "/etc/shared.env"),
                PathBuf::from("/etc/shared.env")
            );
        }
        assert_eq!(
            resolve_env_file("root", "conf/.env"),
            Path::new("root").join("conf/.env")
        );
    }

    #[test]
    fn test_build_env_from_overlays_loaded() {
        let mut loaded = EnvMap::new();
        loaded.insert("HOME".into(), "/override".into());
        loaded.insert("NEW".into(), "1".into());
        let out = build_env_from(["HOME=/home/u", "PATH=/bin", "garbage", "=C:=C:\\"], &loaded);
        assert_eq!(out, vec!["HOME=/override", "NEW=1", "PATH=/bin"]);
    }

    #[test]
    fn test_build_env_from_keeps_equals_in_values() {
        let out = build_env_from(["OPTS=a=b=c"], &EnvMap::new());
        assert_eq!(out, vec!["OPTS=a=b=c"]);
    }

    #[test]
    fn test_invalid_override_key_rejected() {
        let mut env = Environment::default();
        env.overrides.insert("A=B".into(), "x".into());
        let err = load_env(&Project::default(), &env).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::InvalidArgument);
    }
}
