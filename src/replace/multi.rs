//! Simultaneous multi-pattern replacement.
//!
//! Each pass substitutes the earliest-starting occurrence among every
//! still-matching pattern, lowest pattern index winning ties, and resumes
//! past the replacement. A leftmost-first automaton sweep has exactly those
//! semantics, so one pass is one automaton scan.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{Error, Result};

/// A list entry that may be present or absent, so searches and replacements
/// can be given as `&[&str]`, `&[String]`, or `&[Option<&str>]` alike. An
/// absent entry disables its pattern/replacement pair.
pub trait OptStr {
    fn as_opt_str(&self) -> Option<&str>;
}

impl OptStr for &str {
    fn as_opt_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl OptStr for String {
    fn as_opt_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: OptStr> OptStr for Option<T> {
    fn as_opt_str(&self) -> Option<&str> {
        self.as_ref().and_then(OptStr::as_opt_str)
    }
}

/// Replace all occurrences of each search string in one pass.
///
/// Pairs with an absent or empty search, or an absent replacement, are
/// skipped. Absent text stays absent; empty lists leave the text unchanged.
/// The two lists must be the same length once both are non-empty — a
/// mismatch is a precondition violation and panics.
pub fn replace_each<S, R>(text: Option<&str>, searches: &[S], replacements: &[R]) -> Option<String>
where
    S: OptStr,
    R: OptStr,
{
    let text = text?;
    let (result, _) = replace_each_pass(text, searches, replacements);
    Some(result)
}

/// Re-run [`replace_each`] passes until the output stabilizes.
///
/// The pass budget is `searches.len() + 1`; replacement outputs that keep
/// re-introducing other patterns exhaust it and fail with
/// [`Error::CycleDetected`] instead of looping forever.
pub fn replace_each_repeatedly<S, R>(
    text: Option<&str>,
    searches: &[S],
    replacements: &[R],
) -> Result<Option<String>>
where
    S: OptStr,
    R: OptStr,
{
    let text = match text {
        Some(t) => t,
        None => return Ok(None),
    };
    let ttl = searches.len();
    let mut current = text.to_string();
    for _ in 0..=ttl {
        let (next, changed) = replace_each_pass(&current, searches, replacements);
        if !changed {
            return Ok(Some(next));
        }
        current = next;
    }
    Err(Error::CycleDetected { passes: ttl + 1 })
}

/// One full pass. Returns the rewritten text and whether any pattern fired;
/// a pass that rewrites the text to itself still counts as a change.
fn replace_each_pass<S, R>(text: &str, searches: &[S], replacements: &[R]) -> (String, bool)
where
    S: OptStr,
    R: OptStr,
{
    if text.is_empty() || searches.is_empty() || replacements.is_empty() {
        return (text.to_string(), false);
    }
    crate::verify!(
        searches.len() == replacements.len(),
        "search and replacement list lengths don't match: %s vs %s",
        searches.len(),
        replacements.len()
    );

    let mut patterns: Vec<&str> = Vec::with_capacity(searches.len());
    let mut outputs: Vec<&str> = Vec::with_capacity(searches.len());
    for (search, replacement) in searches.iter().zip(replacements) {
        let (search, replacement) = match (search.as_opt_str(), replacement.as_opt_str()) {
            (Some(s), Some(r)) if !s.is_empty() => (s, r),
            _ => continue,
        };
        patterns.push(search);
        outputs.push(replacement);
    }
    if patterns.is_empty() {
        return (text.to_string(), false);
    }

    let automaton = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(&patterns)
        .expect("failed to build search automaton");

    // Pre-size for growth, assuming a few matches per growing pair; a hint
    // only, capped at a fifth of the input.
    let mut growth = 0usize;
    for (search, replacement) in patterns.iter().zip(&outputs) {
        growth += 3 * replacement.len().saturating_sub(search.len());
    }
    let mut out = String::with_capacity(text.len() + growth.min(text.len() / 5));

    let mut changed = false;
    let mut last = 0usize;
    for m in automaton.find_iter(text) {
        changed = true;
        out.push_str(&text[last..m.start()]);
        out.push_str(outputs[m.pattern().as_usize()]);
        last = m.end();
    }
    if !changed {
        return (text.to_string(), false);
    }
    out.push_str(&text[last..]);
    (out, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_inputs() {
        assert_eq!(replace_each(None, &["a"], &["b"]), None);
        assert_eq!(replace_each(Some(""), &["a"], &["b"]), Some("".into()));
        let empty: [&str; 0] = [];
        assert_eq!(
            replace_each(Some("aba"), &empty, &empty),
            Some("aba".into())
        );
        assert_eq!(
            replace_each(Some("aba"), &[None::<&str>], &[Some("a")]),
            Some("aba".into())
        );
        assert_eq!(
            replace_each(Some("aba"), &[""], &["x"]),
            Some("aba".into())
        );
    }

    #[test]
    fn test_single_pass_is_simultaneous() {
        assert_eq!(
            replace_each(Some("abcde"), &["ab", "d"], &["w", "t"]),
            Some("wcte".into())
        );
        // A replacement output is not rescanned within the pass.
        assert_eq!(
            replace_each(Some("abcde"), &["ab", "d"], &["d", "t"]),
            Some("dcte".into())
        );
        assert_eq!(
            replace_each(Some("aba"), &["a"], &[""]),
            Some("b".into())
        );
    }

    #[test]
    fn test_earliest_start_lowest_index_wins() {
        // Both patterns match at offset 0; the lower index takes it.
        assert_eq!(
            replace_each(Some("abc"), &["ab", "abc"], &["1", "2"]),
            Some("1c".into())
        );
        assert_eq!(
            replace_each(Some("abc"), &["abc", "ab"], &["1", "2"]),
            Some("1".into())
        );
        // An earlier start beats a lower index.
        assert_eq!(
            replace_each(Some("xbc"), &["xz", "bc"], &["1", "2"]),
            Some("x2".into())
        );
    }

    #[test]
    fn test_repeated_runs_to_fixed_point() {
        assert_eq!(
            replace_each_repeatedly(Some("abcde"), &["ab", "d"], &["d", "t"]).unwrap(),
            Some("tcte".into())
        );
        assert_eq!(
            replace_each_repeatedly(None, &["a"], &["b"]).unwrap(),
            None
        );
        assert_eq!(
            replace_each_repeatedly(Some("aba"), &["a"], &[""]).unwrap(),
            Some("b".into())
        );
    }

    #[test]
    fn test_repeated_detects_cycles() {
        let err = replace_each_repeatedly(Some("abcde"), &["ab", "d"], &["d", "ab"]).unwrap_err();
        assert!(matches!(err, Error::CycleDetected { passes: 3 }));
    }

    #[test]
    fn test_self_replacement_counts_as_a_change() {
        // The pass fired a match even though the text is unchanged, so the
        // budget still runs out.
        let err = replace_each_repeatedly(Some("a"), &["a"], &["a"]).unwrap_err();
        assert!(matches!(err, Error::CycleDetected { .. }));
    }

    #[test]
    #[should_panic(expected = "lengths don't match: 2 vs 1")]
    fn test_length_mismatch_is_a_precondition() {
        replace_each(Some("abc"), &["a", "b"], &["x"]);
    }

    #[test]
    fn test_length_check_runs_after_no_op_returns() {
        // Mismatched lists are fine when the text is empty or absent.
        assert_eq!(replace_each(Some(""), &["a", "b"], &["x"]), Some("".into()));
        assert_eq!(replace_each(None, &["a", "b"], &["x"]), None);
    }

    #[test]
    fn test_mixed_entry_types() {
        assert_eq!(
            replace_each(
                Some("abcba"),
                &[Some("a"), None, Some("c")],
                &[Some("x"), Some("y"), None],
            ),
            Some("xbcbx".into())
        );
        let owned = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            replace_each(Some("ab"), &owned, &["1", "2"]),
            Some("12".into())
        );
    }
}
