use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Repeated multi-pattern replacement kept producing new matches past
    /// its pass budget; the replacement outputs feed each other.
    #[error("replacements did not converge after {passes} passes")]
    CycleDetected { passes: usize },

    /// An invalid regular expression was handed to the pattern functions.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
