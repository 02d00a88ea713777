//! `.env` file parsing.
//!
//! Format, one assignment per line:
//!
//! ```text
//! # comment
//! export KEY=value
//! KEY2="quoted value"
//! KEY3='single quoted'
//! KEY4=bare value   # trailing text is part of the value
//! ```
//!
//! No escape processing, no inline comments, no variable expansion.

use std::path::Path;

use crate::errors::MenvError;
use crate::util::strip_outer_quotes;
use crate::EnvMap;

/// Parse `.env` text. Later assignments of the same key win.
pub fn parse_env_str(content: &str) -> EnvMap {
    let mut vars = EnvMap::new();
    for (idx, raw) in content.lines().enumerate() {
        match parse_line(raw) {
            Some((key, value)) => {
                vars.insert(key, value);
            }
            None if is_assignment_like(raw) => {
                tracing::warn!(line = idx + 1, "ignoring env line without '='");
            }
            None => {}
        }
    }
    vars
}

/// Read and parse a `.env` file. Only an unreadable file is an error.
pub fn parse_env_file(path: &Path) -> Result<EnvMap, MenvError> {
    let bytes = std::fs::read(path).map_err(|source| MenvError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    // Invalid UTF-8 sequences become U+FFFD; the rest of the file still loads.
    let vars = parse_env_str(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), count = vars.len(), "parsed env file");
    Ok(vars)
}

fn is_assignment_like(raw: &str) -> bool {
    let line = raw.trim();
    !line.is_empty() && !line.starts_with('#')
}

fn parse_line(raw: &str) -> Option<(String, String)> {
    let mut line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some(rest) = line.strip_prefix("export ") {
        line = rest.trim();
    }
    let (key, value) = line.split_once('=')?;
    Some((
        key.trim().to_string(),
        strip_outer_quotes(value.trim()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(m: &'a EnvMap, k: &str) -> Option<&'a str> {
        m.get(k).map(String::as_str)
    }

    #[test]
    fn test_documented_format() {
        let m = parse_env_str(
            "# comment\nexport KEY=value\nKEY2=\"quoted value\"\nKEY3='single quoted'\nKEY4=bare value   # not a comment\n",
        );
        assert_eq!(m.len(), 4);
        assert_eq!(get(&m, "KEY"), Some("value"));
        assert_eq!(get(&m, "KEY2"), Some("quoted value"));
        assert_eq!(get(&m, "KEY3"), Some("single quoted"));
        assert_eq!(get(&m, "KEY4"), Some("bare value   # not a comment"));
    }

    #[test]
    fn test_equals_inside_quoted_value() {
        let m = parse_env_str("KEY=\"a=b\"");
        assert_eq!(get(&m, "KEY"), Some("a=b"));
    }

    #[test]
    fn test_export_with_padding() {
        let m = parse_env_str("   export   FOO=bar   ");
        assert_eq!(get(&m, "FOO"), Some("bar"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_blank_value_kept() {
        let m = parse_env_str("FOO=");
        assert_eq!(get(&m, "FOO"), Some(""));
    }

    #[test]
    fn test_lines_without_equals_skipped() {
        let m = parse_env_str("JUSTAWORD\n\n   \n# x=y\nA=1");
        assert_eq!(m.len(), 1);
        assert_eq!(get(&m, "A"), Some("1"));
    }

    #[test]
    fn test_last_assignment_wins() {
        let m = parse_env_str("A=1\nA=2\n");
        assert_eq!(get(&m, "A"), Some("2"));
    }

    #[test]
    fn test_quotes_only_stripped_when_matching() {
        let m = parse_env_str("A=\"mixed'\nB='\nC=\"\"\nD=\"nested 'inner'\"");
        assert_eq!(get(&m, "A"), Some("\"mixed'"));
        assert_eq!(get(&m, "B"), Some("'"));
        assert_eq!(get(&m, "C"), Some(""));
        assert_eq!(get(&m, "D"), Some("nested 'inner'"));
    }

    #[test]
    fn test_no_escape_processing() {
        let m = parse_env_str(r#"A="line\nbreak""#);
        assert_eq!(get(&m, "A"), Some(r"line\nbreak"));
    }

    #[test]
    fn test_export_needs_trailing_space() {
        let m = parse_env_str("exportFOO=1");
        assert_eq!(get(&m, "exportFOO"), Some("1"));
    }

    #[test]
    fn test_crlf_lines() {
        let m = parse_env_str("A=1\r\nB='two'\r\n");
        assert_eq!(get(&m, "A"), Some("1"));
        assert_eq!(get(&m, "B"), Some("two"));
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let td = tempfile::tempdir().expect("tmpdir");
        let p = td.path().join("nope.env");
        let err = parse_env_file(&p).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::FileError);
        assert!(err.to_string().contains("nope.env"));
    }

    #[test]
    fn test_non_utf8_value_still_loads() {
        let td = tempfile::tempdir().expect("tmpdir");
        let p = td.path().join("latin1.env");
        std::fs::write(&p, b"NAME=caf\xe9\nOK=1\n").unwrap();
        let m = parse_env_file(&p).unwrap();
        assert_eq!(get(&m, "NAME"), Some("caf\u{FFFD}"));
        assert_eq!(get(&m, "OK"), Some("1"));
    }
}
