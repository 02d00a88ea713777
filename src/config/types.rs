use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::EnvMap;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projects: BTreeMap<String, Project>,
}

/// A named project root with its default command and environments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Root directory, stored normalized.
    #[serde(default)]
    pub path: String,

    /// Command used by `menv run` when none is given after `--`.
    #[serde(default)]
    pub command: String,

    #[serde(default)]
    pub envs: BTreeMap<String, Environment>,
}

/// Files (in precedence order, last wins) plus literal overrides that beat every file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub files: Vec<String>,

    #[serde(default)]
    pub overrides: EnvMap,
}

impl Config {
    /// Sample written by `menv init`.
    pub fn sample() -> Self {
        let mut overrides = EnvMap::new();
        overrides.insert("NODE_ENV".to_string(), "development".to_string());
        let mut envs = BTreeMap::new();
        envs.insert(
            "dev".to_string(),
            Environment {
                files: vec![".env.dev".to_string()],
                overrides,
            },
        );
        let mut projects = BTreeMap::new();
        projects.insert(
            "example".to_string(),
            Project {
                path: "/path/to/project".to_string(),
                command: "echo hello".to_string(),
                envs,
            },
        );
        Config { projects }
    }
}
