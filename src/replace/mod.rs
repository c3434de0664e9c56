pub mod multi;
pub mod pattern;

pub use multi::{replace_each, replace_each_repeatedly, OptStr};
pub use pattern::{remove_pattern, replace_pattern};

use memchr::memmem;

/// Replace every occurrence of `search` with `replacement`.
pub fn replace(
    text: Option<&str>,
    search: Option<&str>,
    replacement: Option<&str>,
) -> Option<String> {
    replace_max(text, search, replacement, -1)
}

/// Replace the first occurrence of `search` with `replacement`.
pub fn replace_once(
    text: Option<&str>,
    search: Option<&str>,
    replacement: Option<&str>,
) -> Option<String> {
    replace_max(text, search, replacement, 1)
}

/// Replace up to `max` non-overlapping occurrences of `search`, scanning
/// left to right. Negative `max` means unbounded; `max == 0`, an absent or
/// empty search, or an absent replacement all leave the text unchanged.
/// Absent text stays absent.
pub fn replace_max(
    text: Option<&str>,
    search: Option<&str>,
    replacement: Option<&str>,
    max: isize,
) -> Option<String> {
    let text = text?;
    let (search, replacement) = match (search, replacement) {
        (Some(s), Some(r)) => (s, r),
        _ => return Some(text.to_string()),
    };
    if text.is_empty() || search.is_empty() || max == 0 {
        return Some(text.to_string());
    }
    let finder = memmem::Finder::new(search);
    let mut end = match finder.find(text.as_bytes()) {
        Some(pos) => pos,
        None => return Some(text.to_string()),
    };
    // Pre-size for the growth the replacements can cause; a hint only.
    let growth = replacement.len().saturating_sub(search.len());
    let expected = if max < 0 { 16 } else { max.min(64) as usize };
    let mut out = String::with_capacity(text.len() + growth * expected);
    let mut start = 0usize;
    let mut remaining = max;
    loop {
        out.push_str(&text[start..end]);
        out.push_str(replacement);
        start = end + search.len();
        if remaining > 0 {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
        match finder.find(text[start..].as_bytes()) {
            Some(offset) => end = start + offset,
            None => break,
        }
    }
    out.push_str(&text[start..]);
    Some(out)
}

/// Remove every occurrence of `remove`.
pub fn remove(text: Option<&str>, remove: Option<&str>) -> Option<String> {
    let text = text?;
    match remove {
        Some(r) if !r.is_empty() => replace_max(Some(text), Some(r), Some(""), -1),
        _ => Some(text.to_string()),
    }
}

/// Remove every occurrence of a single character.
pub fn remove_char(text: Option<&str>, remove: char) -> Option<String> {
    let text = text?;
    Some(text.chars().filter(|&c| c != remove).collect())
}

/// Strip `remove` from the start of the text, once, if present.
pub fn remove_start<'a>(text: Option<&'a str>, remove: Option<&str>) -> Option<&'a str> {
    let text = text?;
    match remove {
        Some(r) if !r.is_empty() => Some(text.strip_prefix(r).unwrap_or(text)),
        _ => Some(text),
    }
}

/// Strip `remove` from the end of the text, once, if present.
pub fn remove_end<'a>(text: Option<&'a str>, remove: Option<&str>) -> Option<&'a str> {
    let text = text?;
    match remove {
        Some(r) if !r.is_empty() => Some(text.strip_suffix(r).unwrap_or(text)),
        _ => Some(text),
    }
}

/// Replace every occurrence of one character with another.
pub fn replace_chars(text: Option<&str>, search: char, replacement: char) -> Option<String> {
    let text = text?;
    Some(text.replace(search, replacement.encode_utf8(&mut [0u8; 4])))
}

/// Map characters positionally: a character found at position `i` of
/// `search_chars` becomes the character at position `i` of
/// `replace_chars` — or is deleted when the replacement set is shorter.
/// An absent replacement set deletes every searched character.
pub fn replace_chars_str(
    text: Option<&str>,
    search_chars: Option<&str>,
    replace_chars: Option<&str>,
) -> Option<String> {
    let text = text?;
    let search = match search_chars {
        Some(s) if !s.is_empty() => s,
        _ => return Some(text.to_string()),
    };
    let replacements: Vec<char> = replace_chars.unwrap_or("").chars().collect();
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match search.chars().position(|c| c == ch) {
            Some(index) => {
                if let Some(&mapped) = replacements.get(index) {
                    out.push(mapped);
                }
            }
            None => out.push(ch),
        }
    }
    Some(out)
}

/// Remove all whitespace characters.
pub fn delete_whitespace(text: Option<&str>) -> Option<String> {
    let text = text?;
    Some(text.chars().filter(|c| !c.is_whitespace()).collect())
}
