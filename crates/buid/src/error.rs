/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `buid` can produce.
///
/// Generation is the only fallible operation: it fails if and only if the
/// secure random source cannot supply bytes. Timestamp decoding is total and
/// never errors; malformed input decodes to the zero timestamp instead.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The secure random source could not supply bytes (e.g., the OS entropy
    /// source is unavailable).
    ///
    /// Treat this as retryable after a brief delay, or as fatal for the
    /// current request. Never substitute a non-random value.
    #[error("Random source unavailable: {context}")]
    RandomSource { context: String },
}
