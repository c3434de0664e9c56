/// Coarse character classification used for run-based splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Upper,
    Lower,
    /// Letters without case, e.g. CJK ideographs.
    Letter,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_lowercase() {
            CharClass::Lower
        } else if ch.is_numeric() {
            CharClass::Digit
        } else if ch.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Other
        }
    }
}

/// Split into contiguous runs of the same character class.
pub fn split_by_character_type(text: Option<&str>) -> Option<Vec<&str>> {
    split_by_class(text, false)
}

/// Split into character-class runs with camel-case boundaries: the last
/// uppercase letter of a multi-letter uppercase run that is immediately
/// followed by lowercase letters starts the next token instead of ending
/// the previous one.
pub fn split_by_character_type_camel_case(text: Option<&str>) -> Option<Vec<&str>> {
    split_by_class(text, true)
}

fn split_by_class(text: Option<&str>, camel_case: bool) -> Option<Vec<&str>> {
    let text = text?;
    if text.is_empty() {
        return Some(Vec::new());
    }
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    let mut tokens = Vec::new();
    let mut token_start = 0usize;
    let mut prev_pos = 0usize;
    let mut current = CharClass::of(first);
    for (pos, ch) in chars {
        let class = CharClass::of(ch);
        if class == current {
            prev_pos = pos;
            continue;
        }
        if camel_case && class == CharClass::Lower && current == CharClass::Upper {
            // Reattach the last uppercase letter to the lowercase run that
            // follows it, unless it is the whole run.
            if prev_pos != token_start {
                tokens.push(&text[token_start..prev_pos]);
                token_start = prev_pos;
            }
        } else {
            tokens.push(&text[token_start..pos]);
            token_start = pos;
        }
        current = class;
        prev_pos = pos;
    }
    tokens.push(&text[token_start..]);
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_inputs() {
        assert_eq!(split_by_character_type(None), None);
        assert_eq!(split_by_character_type(Some("")), Some(vec![]));
        assert_eq!(split_by_character_type_camel_case(None), None);
        assert_eq!(split_by_character_type_camel_case(Some("")), Some(vec![]));
    }

    #[test]
    fn test_runs_by_class() {
        assert_eq!(
            split_by_character_type(Some("ab de fg")),
            Some(vec!["ab", " ", "de", " ", "fg"])
        );
        assert_eq!(
            split_by_character_type(Some("ab   de fg")),
            Some(vec!["ab", "   ", "de", " ", "fg"])
        );
        assert_eq!(
            split_by_character_type(Some("ab:cd:ef")),
            Some(vec!["ab", ":", "cd", ":", "ef"])
        );
        assert_eq!(
            split_by_character_type(Some("number5")),
            Some(vec!["number", "5"])
        );
    }

    #[test]
    fn test_plain_split_breaks_camel_words() {
        assert_eq!(
            split_by_character_type(Some("fooBar")),
            Some(vec!["foo", "B", "ar"])
        );
        assert_eq!(
            split_by_character_type(Some("foo200Bar")),
            Some(vec!["foo", "200", "B", "ar"])
        );
        assert_eq!(
            split_by_character_type(Some("ASFRules")),
            Some(vec!["ASFR", "ules"])
        );
    }

    #[test]
    fn test_camel_case_boundaries() {
        assert_eq!(
            split_by_character_type_camel_case(Some("fooBar")),
            Some(vec!["foo", "Bar"])
        );
        assert_eq!(
            split_by_character_type_camel_case(Some("foo200Bar")),
            Some(vec!["foo", "200", "Bar"])
        );
        assert_eq!(
            split_by_character_type_camel_case(Some("ASFRules")),
            Some(vec!["ASF", "Rules"])
        );
    }

    #[test]
    fn test_single_upper_starts_its_own_token() {
        assert_eq!(
            split_by_character_type_camel_case(Some("X")),
            Some(vec!["X"])
        );
        assert_eq!(
            split_by_character_type_camel_case(Some("Xy")),
            Some(vec!["Xy"])
        );
    }

    #[test]
    fn test_multibyte_classes() {
        assert_eq!(
            split_by_character_type_camel_case(Some("ÜBERmaß")),
            Some(vec!["ÜBE", "Rmaß"])
        );
        assert_eq!(
            split_by_character_type(Some("ÜBERmaß")),
            Some(vec!["ÜBER", "maß"])
        );
    }
}
