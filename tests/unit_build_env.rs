use menv::{build_env, build_env_from, EnvMap};

fn lookup<'a>(entries: &'a [String], key: &str) -> Option<&'a str> {
    let prefix = format!("{key}=");
    entries
        .iter()
        .find_map(|e| e.strip_prefix(prefix.as_str()))
}

#[test]
fn unit_inherited_vars_preserved_and_loaded_win() {
    let base = ["KEEP=me", "CLASH=os", "Path=win-style"];
    let mut loaded = EnvMap::new();
    loaded.insert("CLASH".into(), "loaded".into());
    loaded.insert("ADDED".into(), "new".into());
    loaded.insert("path".into(), "lower".into());

    let out = build_env_from(base, &loaded);
    assert_eq!(lookup(&out, "KEEP"), Some("me"));
    assert_eq!(lookup(&out, "CLASH"), Some("loaded"));
    assert_eq!(lookup(&out, "ADDED"), Some("new"));
    // Keys are case-sensitive.
    assert_eq!(lookup(&out, "Path"), Some("win-style"));
    assert_eq!(lookup(&out, "path"), Some("lower"));
    assert_eq!(out.len(), 5);
}

#[test]
fn unit_every_key_appears_once() {
    let mut loaded = EnvMap::new();
    loaded.insert("A".into(), "2".into());
    let out = build_env_from(["A=1", "A=1b"], &loaded);
    assert_eq!(out, vec!["A=2".to_string()]);
}

#[test]
fn unit_build_env_uses_process_environment() {
    let key = "MENV_TEST_INHERITED_MARKER";
    std::env::set_var(key, "inherited-value");

    let mut loaded = EnvMap::new();
    loaded.insert("MENV_TEST_LOADED_MARKER".into(), "x".into());
    let out = build_env(&loaded);

    assert_eq!(lookup(&out, key), Some("inherited-value"));
    assert_eq!(lookup(&out, "MENV_TEST_LOADED_MARKER"), Some("x"));
    assert!(out.iter().all(|e| e.split_once('=').is_some_and(|(k, _)| !k.is_empty())));
}
