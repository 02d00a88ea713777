/*!
Test support helpers shared across integration tests.

- write(dir, name, content): write a fixture file
- project_at(root) / env_of(files, overrides): build config values in memory
- run_menv(config, args): run the menv binary against an isolated config file

Binary runs clear MENV_* variables and force `--color never` so output is
stable regardless of the developer's shell.
*/

use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, Output};

use menv::{Environment, Project};

#[allow(dead_code)]
pub fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write fixture");
}

#[allow(dead_code)]
pub fn project_at(root: &Path) -> Project {
    Project {
        path: root.to_string_lossy().into_owned(),
        command: String::new(),
        envs: BTreeMap::new(),
    }
}

#[allow(dead_code)]
pub fn env_of(files: &[&str], overrides: &[(&str, &str)]) -> Environment {
    Environment {
        files: files.iter().map(|s| s.to_string()).collect(),
        overrides: overrides
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// Command for the menv binary bound to `config`, with a clean MENV_* environment.
#[allow(dead_code)]
pub fn menv_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_menv"));
    cmd.arg("--config")
        .arg(config)
        .arg("--color")
        .arg("never")
        .env_remove("MENV_CONFIG")
        .env_remove("MENV_LOG")
        .env_remove("MENV_COLOR");
    cmd
}

#[allow(dead_code)]
pub fn run_menv(config: &Path, args: &[&str]) -> Output {
    menv_cmd(config).args(args).output().expect("failed to run menv")
}

#[allow(dead_code)]
pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Assert success, showing both streams on failure.
#[allow(dead_code)]
pub fn assert_ok(out: &Output, what: &str) {
    assert!(
        out.status.success(),
        "{} exited non-zero: {:?}\nstdout:\n{}\nstderr:\n{}",
        what,
        out.status.code(),
        stdout(out),
        stderr(out)
    );
}
