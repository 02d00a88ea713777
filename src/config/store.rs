use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::errors::MenvError;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "MENV_CONFIG";

/// File name used under the home directory when nothing else is configured.
pub const DEFAULT_CONFIG_FILE: &str = ".menv.yaml";

/// Location of the configuration file, resolved once at startup and passed to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the config path: explicit flag, then `$MENV_CONFIG`, then `~/.menv.yaml`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, MenvError> {
        Self::resolve_with(
            explicit,
            std::env::var(CONFIG_ENV_VAR).ok(),
            home::home_dir(),
        )
    }

    pub fn resolve_with(
        explicit: Option<PathBuf>,
        env_value: Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self, MenvError> {
        if let Some(p) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self::new(p));
        }
        if let Some(v) = env_value.filter(|v| !v.trim().is_empty()) {
            return Ok(Self::new(v));
        }
        match home {
            Some(h) => Ok(Self::new(h.join(DEFAULT_CONFIG_FILE))),
            None => Err(MenvError::NoConfigPath),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Config, MenvError> {
        let content = fs::read_to_string(&self.path).map_err(|source| MenvError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;
        // serde_yaml rejects an empty document; treat it as "no projects yet".
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config =
            serde_yaml::from_str(&content).map_err(|source| MenvError::ConfigParse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            projects = config.projects.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), MenvError> {
        let write_err = |source| MenvError::ConfigWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let text = serde_yaml::to_string(config).map_err(MenvError::ConfigSerialize)?;
        fs::write(&self.path, text).map_err(write_err)?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
