//! Rebuild strings from sequences of elements.
//!
//! One generic worker covers every element type through its `Display`
//! projection, instead of one entry point per numeric width. An absent
//! element contributes no text but still occupies its separator slot.

use std::fmt::Display;
use std::fmt::Write;

fn join_parts<I, T>(parts: I, sep: &str) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    let mut iter = parts.into_iter();
    let mut out = String::new();
    match iter.next() {
        None => return out,
        Some(first) => {
            if let Some(value) = first {
                let _ = write!(out, "{value}");
            }
        }
    }
    for part in iter {
        out.push_str(sep);
        if let Some(value) = part {
            let _ = write!(out, "{value}");
        }
    }
    out
}

/// Join a slice with a character separator. `None` slice yields `None`;
/// an empty slice yields an empty string.
pub fn join<T: Display>(items: Option<&[T]>, sep: char) -> Option<String> {
    join_str(items, Some(sep.encode_utf8(&mut [0u8; 4])))
}

/// Join a slice with a string separator; an absent separator means none.
pub fn join_str<T: Display>(items: Option<&[T]>, sep: Option<&str>) -> Option<String> {
    let items = items?;
    Some(join_parts(items.iter().map(Some), sep.unwrap_or("")))
}

/// Join `items[start..end]` with a character separator.
///
/// The bounds are a strict precondition: `start <= end <= items.len()`.
/// Violations panic; nothing is clamped. An empty range yields an empty
/// string.
pub fn join_range<T: Display>(
    items: Option<&[T]>,
    sep: char,
    start: usize,
    end: usize,
) -> Option<String> {
    join_str_range(items, Some(sep.encode_utf8(&mut [0u8; 4])), start, end)
}

/// Join `items[start..end]` with a string separator.
pub fn join_str_range<T: Display>(
    items: Option<&[T]>,
    sep: Option<&str>,
    start: usize,
    end: usize,
) -> Option<String> {
    let items = items?;
    crate::verify!(
        start <= end && end <= items.len(),
        "join range %s..%s out of bounds for length %s",
        start,
        end,
        items.len()
    );
    Some(join_parts(items[start..end].iter().map(Some), sep.unwrap_or("")))
}

/// Join a slice of optional elements; absent elements contribute nothing.
pub fn join_opt<T: Display>(items: Option<&[Option<T>]>, sep: char) -> Option<String> {
    join_opt_str(items, Some(sep.encode_utf8(&mut [0u8; 4])))
}

/// Join a slice of optional elements with a string separator.
pub fn join_opt_str<T: Display>(
    items: Option<&[Option<T>]>,
    sep: Option<&str>,
) -> Option<String> {
    let items = items?;
    Some(join_parts(items.iter().map(Option::as_ref), sep.unwrap_or("")))
}

/// Join anything iterable with a character separator. The iterator is
/// consumed exactly once, in order.
pub fn join_iter<I>(items: Option<I>, sep: char) -> Option<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    join_iter_str(items, Some(sep.encode_utf8(&mut [0u8; 4])))
}

/// Join anything iterable with a string separator.
pub fn join_iter_str<I>(items: Option<I>, sep: Option<&str>) -> Option<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    let items = items?;
    Some(join_parts(items.into_iter().map(Some), sep.unwrap_or("")))
}
