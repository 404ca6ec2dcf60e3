use thiserror::Error;

/// Result type for source builder operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A dedent was requested while the indentation level was already zero.
    ///
    /// This signals mismatched indent/dedent calls in the caller.
    #[error("indent level is already at zero")]
    DedentUnderflow,
}
