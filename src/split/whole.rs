use memchr::memmem;

use super::{split_with, Delimiter};

/// Split on a whole literal separator, collapsing adjacent separators.
///
/// `None` text yields `None`; an absent or empty separator falls back to
/// whitespace splitting. A nonzero `max` caps the token count, with the
/// final token taking the rest of the input verbatim. A separator at the
/// very end of the text produces a trailing empty token.
pub fn split_whole<'a>(
    text: Option<&'a str>,
    sep: Option<&str>,
    max: usize,
) -> Option<Vec<&'a str>> {
    split_whole_worker(text, sep, max, false)
}

/// Like [`split_whole`], but adjacent separators produce empty tokens.
pub fn split_whole_preserve_all<'a>(
    text: Option<&'a str>,
    sep: Option<&str>,
    max: usize,
) -> Option<Vec<&'a str>> {
    split_whole_worker(text, sep, max, true)
}

fn split_whole_worker<'a>(
    text: Option<&'a str>,
    sep: Option<&str>,
    max: usize,
    preserve_all: bool,
) -> Option<Vec<&'a str>> {
    let text = text?;
    if text.is_empty() {
        return Some(Vec::new());
    }
    let sep = match sep {
        Some(s) if !s.is_empty() => s,
        _ => return split_with(Some(text), Delimiter::Whitespace, max, preserve_all),
    };

    let finder = memmem::Finder::new(sep);
    let mut tokens = Vec::new();
    let mut count = 0usize;
    let mut beg = 0usize;
    loop {
        match finder.find(text[beg..].as_bytes()) {
            Some(offset) => {
                let end = beg + offset;
                if end > beg {
                    count += 1;
                    if count == max {
                        tokens.push(&text[beg..]);
                        return Some(tokens);
                    }
                    tokens.push(&text[beg..end]);
                } else if preserve_all {
                    // Separator adjacent to the previous boundary.
                    count += 1;
                    if count == max {
                        tokens.push(&text[beg..]);
                        return Some(tokens);
                    }
                    tokens.push("");
                }
                beg = end + sep.len();
            }
            None => {
                // Remainder of the text; empty exactly when a separator
                // ended the input.
                tokens.push(&text[beg..]);
                return Some(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_inputs() {
        assert_eq!(split_whole(None, Some("-!-"), 0), None);
        assert_eq!(split_whole(Some(""), Some("-!-"), 0), Some(vec![]));
    }

    #[test]
    fn test_literal_separator() {
        assert_eq!(
            split_whole(Some("ab-!-cd-!-ef"), Some("-!-"), 0),
            Some(vec!["ab", "cd", "ef"])
        );
        assert_eq!(
            split_whole(Some("ab-!-cd-!-ef"), Some("-!-"), 5),
            Some(vec!["ab", "cd", "ef"])
        );
    }

    #[test]
    fn test_separator_is_matched_as_a_unit() {
        // The characters of the separator are not individual delimiters.
        assert_eq!(
            split_whole(Some("a-b-!-c!d"), Some("-!-"), 0),
            Some(vec!["a-b", "c!d"])
        );
    }

    #[test]
    fn test_adjacent_separators_collapse() {
        assert_eq!(
            split_whole(Some("ab-!--!-cd"), Some("-!-"), 0),
            Some(vec!["ab", "cd"])
        );
        assert_eq!(
            split_whole(Some("-!-ab"), Some("-!-"), 0),
            Some(vec!["ab"])
        );
    }

    #[test]
    fn test_trailing_separator_yields_empty_remainder() {
        assert_eq!(
            split_whole(Some("ab-!-"), Some("-!-"), 0),
            Some(vec!["ab", ""])
        );
    }

    #[test]
    fn test_max_final_slot_absorbs_rest() {
        assert_eq!(
            split_whole(Some("ab-!-cd-!-ef"), Some("-!-"), 2),
            Some(vec!["ab", "cd-!-ef"])
        );
        assert_eq!(
            split_whole(Some("ab:cd:ef"), Some(":"), 2),
            Some(vec!["ab", "cd:ef"])
        );
    }

    #[test]
    fn test_preserve_all_emits_empty_tokens() {
        assert_eq!(
            split_whole_preserve_all(Some("ab::cd"), Some(":"), 0),
            Some(vec!["ab", "", "cd"])
        );
        assert_eq!(
            split_whole_preserve_all(Some("::ab"), Some(":"), 0),
            Some(vec!["", "", "ab"])
        );
    }

    #[test]
    fn test_empty_separator_falls_back_to_whitespace() {
        assert_eq!(
            split_whole(Some("ab   de fg"), None, 0),
            Some(vec!["ab", "de", "fg"])
        );
        assert_eq!(
            split_whole(Some("ab de"), Some(""), 0),
            Some(vec!["ab", "de"])
        );
    }
}
