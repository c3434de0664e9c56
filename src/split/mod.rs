pub mod char_type;
pub mod whole;

pub use char_type::{split_by_character_type, split_by_character_type_camel_case, CharClass};
pub use whole::{split_whole, split_whole_preserve_all};

/// How split points are found in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter<'d> {
    /// Any Unicode whitespace character.
    Whitespace,
    /// A single character, compared by equality.
    Char(char),
    /// Every character of the given string, each one an independent delimiter.
    AnyOf(&'d str),
}

impl<'d> Delimiter<'d> {
    /// Resolve an optional character-set string the way the split functions
    /// interpret it: absent means whitespace, a one-character set uses the
    /// direct-equality fast path.
    pub fn from_chars(chars: Option<&'d str>) -> Self {
        match chars {
            None => Delimiter::Whitespace,
            Some(s) => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) => Delimiter::Char(c),
                    _ => Delimiter::AnyOf(s),
                }
            }
        }
    }

    fn is_delimiter(&self, ch: char) -> bool {
        match *self {
            Delimiter::Whitespace => ch.is_whitespace(),
            Delimiter::Char(c) => ch == c,
            Delimiter::AnyOf(set) => set.contains(ch),
        }
    }
}

/// Split `text` into borrowed tokens.
///
/// `None` text yields `None`; empty text yields an empty vector. With
/// `preserve_all` set, every delimiter occurrence produces a split point, so
/// adjacent, leading, and trailing delimiters yield empty tokens; otherwise
/// delimiter runs collapse and never produce empty tokens. A nonzero `max`
/// caps the token count: the final token absorbs the rest of the input,
/// delimiters included. `max == 0` means unbounded.
pub fn split_with<'a>(
    text: Option<&'a str>,
    delim: Delimiter<'_>,
    max: usize,
    preserve_all: bool,
) -> Option<Vec<&'a str>> {
    let text = text?;
    if text.is_empty() {
        return Some(Vec::new());
    }
    let mut tokens = Vec::new();
    // Token number the next emission would get; never 0, so max == 0 never caps.
    let mut size_plus1 = 1usize;
    let mut start = 0usize;
    let mut matched = false;
    let mut last_match = false;
    for (i, ch) in text.char_indices() {
        if delim.is_delimiter(ch) {
            if matched || preserve_all {
                last_match = true;
                if size_plus1 == max {
                    // Final slot: absorb the remainder, delimiters included.
                    tokens.push(&text[start..]);
                    return Some(tokens);
                }
                size_plus1 += 1;
                tokens.push(&text[start..i]);
                matched = false;
            }
            start = i + ch.len_utf8();
            continue;
        }
        last_match = false;
        matched = true;
    }
    if matched || (preserve_all && last_match) {
        tokens.push(&text[start..]);
    }
    Some(tokens)
}

/// Split on whitespace, collapsing delimiter runs.
pub fn split(text: Option<&str>) -> Option<Vec<&str>> {
    split_with(text, Delimiter::Whitespace, 0, false)
}

/// Split on a single character, collapsing delimiter runs.
pub fn split_char(text: Option<&str>, sep: char) -> Option<Vec<&str>> {
    split_with(text, Delimiter::Char(sep), 0, false)
}

/// Split on any character of `seps` (`None` splits on whitespace).
pub fn split_any<'a>(text: Option<&'a str>, seps: Option<&str>) -> Option<Vec<&'a str>> {
    split_with(text, Delimiter::from_chars(seps), 0, false)
}

/// Split on any character of `seps`, yielding at most `max` tokens.
pub fn split_any_max<'a>(
    text: Option<&'a str>,
    seps: Option<&str>,
    max: usize,
) -> Option<Vec<&'a str>> {
    split_with(text, Delimiter::from_chars(seps), max, false)
}

/// Split on whitespace, keeping empty tokens at adjacent delimiters.
pub fn split_preserve_all(text: Option<&str>) -> Option<Vec<&str>> {
    split_with(text, Delimiter::Whitespace, 0, true)
}

/// Split on a single character, keeping empty tokens at adjacent delimiters.
pub fn split_char_preserve_all(text: Option<&str>, sep: char) -> Option<Vec<&str>> {
    split_with(text, Delimiter::Char(sep), 0, true)
}

/// Split on any character of `seps`, keeping empty tokens.
pub fn split_any_preserve_all<'a>(
    text: Option<&'a str>,
    seps: Option<&str>,
) -> Option<Vec<&'a str>> {
    split_with(text, Delimiter::from_chars(seps), 0, true)
}

/// Split on any character of `seps`, keeping empty tokens, capped at `max`.
pub fn split_any_preserve_all_max<'a>(
    text: Option<&'a str>,
    seps: Option<&str>,
    max: usize,
) -> Option<Vec<&'a str>> {
    split_with(text, Delimiter::from_chars(seps), max, true)
}
