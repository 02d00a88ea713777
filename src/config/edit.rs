use super::detect::detect_project;
use super::types::{Config, Environment, Project};
use crate::errors::MenvError;
use crate::paths::normalize_path;
use crate::EnvMap;

impl Config {
    pub fn project(&self, name: &str) -> Result<&Project, MenvError> {
        self.projects
            .get(name)
            .ok_or_else(|| MenvError::ProjectNotFound(name.to_string()))
    }

    /// Look a project up by name, or detect it from the working directory when no name is given.
    pub fn resolve_project(&self, name: Option<&str>) -> Result<(String, &Project), MenvError> {
        match name {
            Some(n) => Ok((n.to_string(), self.project(n)?)),
            None => detect_project(self)
                .map(|(n, p)| (n.to_string(), p))
                .ok_or(MenvError::ProjectNotDetected),
        }
    }

    /// Register a project. `path` is normalized before it is stored.
    pub fn add_project(
        &mut self,
        name: &str,
        path: &str,
        command: &str,
    ) -> Result<&Project, MenvError> {
        validate_name("project", name)?;
        if self.projects.contains_key(name) {
            return Err(MenvError::ProjectExists(name.to_string()));
        }
        let project = Project {
            path: normalize_path(path),
            command: command.to_string(),
            envs: Default::default(),
        };
        Ok(self.projects.entry(name.to_string()).or_insert(project))
    }

    pub fn remove_project(&mut self, name: &str) -> Result<Project, MenvError> {
        self.projects
            .remove(name)
            .ok_or_else(|| MenvError::ProjectNotFound(name.to_string()))
    }

    /// Other projects whose root contains, or is contained in, `root`.
    ///
    /// Overlapping roots are allowed but make detection depend on specificity.
    pub fn overlapping_projects(&self, name: &str, root: &str) -> Vec<&str> {
        let root = normalize_path(root);
        if root.is_empty() {
            return Vec::new();
        }
        self.projects
            .iter()
            .filter(|(n, _)| n.as_str() != name)
            .filter(|(_, p)| {
                let other = normalize_path(&p.path);
                !other.is_empty() && (nests(&root, &other) || nests(&other, &root))
            })
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn add_env(
        &mut self,
        project: &str,
        env: &str,
        files: Vec<String>,
        overrides: EnvMap,
    ) -> Result<(), MenvError> {
        validate_name("environment", env)?;
        let p = self
            .projects
            .get_mut(project)
            .ok_or_else(|| MenvError::ProjectNotFound(project.to_string()))?;
        if p.envs.contains_key(env) {
            return Err(MenvError::EnvExists {
                project: project.to_string(),
                env: env.to_string(),
            });
        }
        p.envs
            .insert(env.to_string(), Environment { files, overrides });
        Ok(())
    }

    pub fn remove_env(&mut self, project: &str, env: &str) -> Result<Environment, MenvError> {
        let p = self
            .projects
            .get_mut(project)
            .ok_or_else(|| MenvError::ProjectNotFound(project.to_string()))?;
        p.envs.remove(env).ok_or_else(|| MenvError::EnvNotFound {
            project: project.to_string(),
            env: env.to_string(),
        })
    }
}

impl Project {
    /// `project_name` is only used for the error message.
    pub fn env(&self, project_name: &str, env: &str) -> Result<&Environment, MenvError> {
        self.envs.get(env).ok_or_else(|| MenvError::EnvNotFound {
            project: project_name.to_string(),
            env: env.to_string(),
        })
    }
}

/// Parse `KEY=VALUE` items (as given to `env add --override`) into a map.
pub fn parse_overrides<S: AsRef<str>>(items: &[S]) -> Result<EnvMap, MenvError> {
    let mut out = EnvMap::new();
    for item in items {
        let item = item.as_ref();
        match item.split_once('=') {
            Some((k, v)) if !k.is_empty() => {
                out.insert(k.to_string(), v.to_string());
            }
            _ => {
                return Err(MenvError::invalid(format!(
                    "invalid override format {item:?} (expected KEY=VALUE)"
                )))
            }
        }
    }
    Ok(out)
}

fn validate_name(what: &str, name: &str) -> Result<(), MenvError> {
    if name.trim().is_empty() {
        return Err(MenvError::invalid(format!("{what} name must not be empty")));
    }
    Ok(())
}

fn nests(inner: &str, outer: &str) -> bool {
    inner == outer
        || inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with(std::path::MAIN_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_parse_overrides() {
        let m = parse_overrides(&["A=1", "B=x=y", "C="]).unwrap();
        assert_eq!(m["A"], "1");
        assert_eq!(m["B"], "x=y");
        assert_eq!(m["C"], "");

        let err = parse_overrides(&["NOEQUALS"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("NOEQUALS"));
        assert!(parse_overrides(&["=v"]).is_err());
    }

    #[test]
    fn test_project_crud() {
        let td = tempfile::tempdir().expect("tmpdir");
        let root = td.path().to_string_lossy().into_owned();
        let mut cfg = Config::default();

        let p = cfg.add_project("app", &root, "make run").unwrap();
        assert_eq!(
            p.path,
            std::fs::canonicalize(td.path()).unwrap().to_string_lossy()
        );
        assert_eq!(p.command, "make run");

        let err = cfg.add_project("app", &root, "").unwrap_err();
        assert!(matches!(err, MenvError::ProjectExists(_)));

        cfg.remove_project("app").unwrap();
        let err = cfg.remove_project("app").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_env_crud_and_lookup() {
        let mut cfg = Config::default();
        cfg.projects.insert("app".into(), Project::default());

        let overrides = parse_overrides(&["BAR=2"]).unwrap();
        cfg.add_env("app", "dev", vec![".env.dev".into()], overrides)
            .unwrap();
        let err = cfg
            .add_env("app", "dev", Vec::new(), EnvMap::new())
            .unwrap_err();
        assert!(matches!(err, MenvError::EnvExists { .. }));
        let err = cfg
            .add_env("ghost", "dev", Vec::new(), EnvMap::new())
            .unwrap_err();
        assert!(matches!(err, MenvError::ProjectNotFound(_)));

        let project = cfg.project("app").unwrap();
        let env = project.env("app", "dev").unwrap();
        assert_eq!(env.files, vec![".env.dev".to_string()]);
        assert_eq!(env.overrides["BAR"], "2");
        let err = project.env("app", "prod").unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment \"prod\" not found in project \"app\""
        );

        cfg.remove_env("app", "dev").unwrap();
        assert!(cfg.remove_env("app", "dev").is_err());
    }

    #[test]
    fn test_resolve_project_by_name() {
        let mut cfg = Config::default();
        cfg.projects.insert("app".into(), Project::default());
        let (name, _) = cfg.resolve_project(Some("app")).unwrap();
        assert_eq!(name, "app");
        assert!(matches!(
            cfg.resolve_project(Some("nope")),
            Err(MenvError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn test_overlapping_projects() {
        let td = tempfile::tempdir().expect("tmpdir");
        let outer = td.path().join("mono");
        let inner = outer.join("api");
        let other = td.path().join("mono2");
        for d in [&inner, &other] {
            std::fs::create_dir_all(d).unwrap();
        }
        let mut cfg = Config::default();
        cfg.add_project("mono", &outer.to_string_lossy(), "").unwrap();
        cfg.add_project("mono2", &other.to_string_lossy(), "")
            .unwrap();

        let hits = cfg.overlapping_projects("api", &inner.to_string_lossy());
        assert_eq!(hits, vec!["mono"]);
        assert!(cfg
            .overlapping_projects("mono", &outer.to_string_lossy())
            .is_empty());
    }
}
