//! Tokenization, substitution, and path normalization for text.
//!
//! Strings are split under several delimiter models (whitespace, single
//! character, character set, whole literal separator, character class),
//! rejoined with configurable separators, rewritten by single- or
//! multi-pattern substitution with cycle detection, and normalized as
//! filesystem-style paths.
//!
//! Absent input is a first-class state, not an error: every operation maps
//! `None` in to `None` out. Splitters return borrowed subslices of their
//! input and never allocate token text.

pub mod copy;
pub mod error;
pub mod inspect;
pub mod join;
pub mod path;
pub mod replace;
pub mod split;
pub mod trim;
pub mod verify;

pub use error::{Error, Result};
pub use join::{join, join_str};
pub use path::{clean_path, path_equals};
pub use replace::{replace, replace_each, replace_each_repeatedly};
pub use split::{split, split_any, split_char, split_whole, Delimiter};
