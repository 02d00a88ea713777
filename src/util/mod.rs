#![allow(clippy::module_name_repetitions)]
//! Small string utilities: shell quoting, quote stripping and command-line splitting.

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_=./:@".contains(c)
}

/// Render an argument vector as a line a POSIX shell would split back into the same words.
pub fn shell_join(args: &[String]) -> String {
    let quoted: Vec<String> = args.iter().map(|a| shell_escape(a)).collect();
    quoted.join(" ")
}

/// POSIX single-quoted form of `s`; left bare when every character is safe.
pub fn shell_escape(s: &str) -> String {
    if !s.is_empty() && s.chars().all(is_shell_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

/// Remove one layer of outer single or double quotes if the whole string is wrapped.
pub fn strip_outer_quotes(s: &str) -> String {
    if s.len() >= 2 {
        let b = s.as_bytes();
        let first = b[0] as char;
        let last = b[s.len() - 1] as char;
        if (first == '\'' && last == '\'') || (first == '"' && last == '"') {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

/// Split a configured command line into words for direct execution.
///
/// Whitespace separates words; single and double quotes group (and are removed).
/// No escapes, expansion or operators. A quoted empty string (`''`) is kept as an
/// empty word.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut quote: Option<char> = None;
    let mut started = false;

    for ch in line.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => word.push(c),
            (None, '\'' | '"') => {
                quote = Some(ch);
                started = true;
            }
            (None, c) if c.is_whitespace() => {
                if started {
                    words.push(std::mem::take(&mut word));
                    started = false;
                }
            }
            (None, c) => {
                word.push(c);
                started = true;
            }
        }
    }
    if started {
        words.push(word);
    }
    words
}
