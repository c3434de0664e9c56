//! Zero-copy trimming and stripping; every result borrows the input.

/// Trim Unicode whitespace from both ends. Absent stays absent.
pub fn trim(text: Option<&str>) -> Option<&str> {
    text.map(str::trim)
}

/// Trim, turning an empty result into absence.
pub fn trim_to_none(text: Option<&str>) -> Option<&str> {
    match text.map(str::trim) {
        Some("") | None => None,
        trimmed => trimmed,
    }
}

/// Trim, turning absence into the empty string.
pub fn trim_to_empty(text: Option<&str>) -> &str {
    text.map(str::trim).unwrap_or("")
}

/// Strip characters from the start: any character of `chars`, or
/// whitespace when `chars` is absent. An empty set strips nothing.
pub fn strip_start<'a>(text: Option<&'a str>, chars: Option<&str>) -> Option<&'a str> {
    let text = text?;
    Some(match chars {
        None => text.trim_start(),
        Some("") => text,
        Some(set) => text.trim_start_matches(|c| set.contains(c)),
    })
}

/// Strip characters from the end; same set rules as [`strip_start`].
pub fn strip_end<'a>(text: Option<&'a str>, chars: Option<&str>) -> Option<&'a str> {
    let text = text?;
    Some(match chars {
        None => text.trim_end(),
        Some("") => text,
        Some(set) => text.trim_end_matches(|c| set.contains(c)),
    })
}

/// Strip characters from both ends; same set rules as [`strip_start`].
pub fn strip_chars<'a>(text: Option<&'a str>, chars: Option<&str>) -> Option<&'a str> {
    strip_end(strip_start(text, chars), chars)
}
