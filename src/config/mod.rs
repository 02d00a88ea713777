//! Project/environment configuration.
//!
//! - `types`: the YAML document model (`projects -> path/command/envs`)
//! - `store`: where the file lives and how it is read/written
//! - `detect`: which project the current directory belongs to
//! - `edit`: lookups and mutations used by the CLI

mod detect;
mod edit;
mod store;
mod types;

pub use detect::{detect_project, detect_project_from};
pub use edit::parse_overrides;
pub use store::{ConfigStore, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use types::{Config, Environment, Project};
