//! Regex-backed replacement, delegated to the `regex` crate.

use regex::Regex;

use crate::error::Result;

/// Replace every match of `pattern` with `replacement`, with `.` matching
/// newlines. The pattern is compiled per call; `$n`/`$name` references in
/// the replacement refer to capture groups. Absent source stays absent.
pub fn replace_pattern(
    source: Option<&str>,
    pattern: &str,
    replacement: &str,
) -> Result<Option<String>> {
    let source = match source {
        Some(s) => s,
        None => return Ok(None),
    };
    let re = Regex::new(&format!("(?s){pattern}"))?;
    Ok(Some(re.replace_all(source, replacement).into_owned()))
}

/// Remove every match of `pattern`, with `.` matching newlines.
pub fn remove_pattern(source: Option<&str>, pattern: &str) -> Result<Option<String>> {
    replace_pattern(source, pattern, "")
}
