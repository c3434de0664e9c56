//! Predicates and measurements over optional text.
//!
//! Absence counts as empty and blank, and fails every content-class check.

use memchr::memmem;

/// Whether the text is absent or has no characters.
pub fn is_empty(text: Option<&str>) -> bool {
    matches!(text, None | Some(""))
}

pub fn is_not_empty(text: Option<&str>) -> bool {
    !is_empty(text)
}

/// Whether any of the given texts is empty. An empty list is not.
pub fn is_any_empty(texts: &[Option<&str>]) -> bool {
    texts.iter().any(|t| is_empty(*t))
}

pub fn is_none_empty(texts: &[Option<&str>]) -> bool {
    !is_any_empty(texts)
}

/// Whether the text is absent, empty, or whitespace only.
pub fn is_blank(text: Option<&str>) -> bool {
    match text {
        None => true,
        Some(t) => t.chars().all(char::is_whitespace),
    }
}

pub fn is_not_blank(text: Option<&str>) -> bool {
    !is_blank(text)
}

pub fn is_any_blank(texts: &[Option<&str>]) -> bool {
    texts.iter().any(|t| is_blank(*t))
}

pub fn is_none_blank(texts: &[Option<&str>]) -> bool {
    !is_any_blank(texts)
}

/// Whether the text is non-empty and all letters.
pub fn is_alpha(text: Option<&str>) -> bool {
    match text {
        None | Some("") => false,
        Some(t) => t.chars().all(char::is_alphabetic),
    }
}

/// Whether the text is all letters and spaces. Empty passes, absent fails.
pub fn is_alpha_space(text: Option<&str>) -> bool {
    match text {
        None => false,
        Some(t) => t.chars().all(|c| c.is_alphabetic() || c == ' '),
    }
}

/// Whether the text is non-empty and all letters or digits.
pub fn is_alphanumeric(text: Option<&str>) -> bool {
    match text {
        None | Some("") => false,
        Some(t) => t.chars().all(char::is_alphanumeric),
    }
}

pub fn is_alphanumeric_space(text: Option<&str>) -> bool {
    match text {
        None => false,
        Some(t) => t.chars().all(|c| c.is_alphanumeric() || c == ' '),
    }
}

/// Whether the text is non-empty and all digits. Signs and decimal points
/// do not count.
pub fn is_numeric(text: Option<&str>) -> bool {
    match text {
        None | Some("") => false,
        Some(t) => t.chars().all(char::is_numeric),
    }
}

pub fn is_numeric_space(text: Option<&str>) -> bool {
    match text {
        None => false,
        Some(t) => t.chars().all(|c| c.is_numeric() || c == ' '),
    }
}

/// Whether the text contains any whitespace character.
pub fn contains_whitespace(text: Option<&str>) -> bool {
    match text {
        None => false,
        Some(t) => t.chars().any(char::is_whitespace),
    }
}

/// Count non-overlapping occurrences of `sub`. Absent or empty inputs
/// count zero.
pub fn count_occurrences(text: Option<&str>, sub: Option<&str>) -> usize {
    let (text, sub) = match (text, sub) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => (t, s),
        _ => return 0,
    };
    memmem::find_iter(text.as_bytes(), sub.as_bytes()).count()
}

/// Whether `substring` occurs in `text` starting at byte `index`. Indexes
/// past the end never match.
pub fn substring_match(text: &str, index: usize, substring: &str) -> bool {
    match text.get(index..) {
        Some(tail) => tail.starts_with(substring),
        None => false,
    }
}

/// Case-insensitive equality by simple per-character case folding.
/// Absent equals absent.
pub fn equals_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
        }
        _ => false,
    }
}
