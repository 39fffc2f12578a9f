use crate::Result;

/// A source of cryptographically secure random bytes.
///
/// Implement this to control the entropy that goes into generated
/// identifiers, e.g. to supply deterministic bytes in tests.
///
/// # Example
///
/// ```
/// use buid::{RandomSource, Result};
///
/// struct FixedRandom;
///
/// impl RandomSource for FixedRandom {
///     fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
///         buf.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0u8; 3];
/// FixedRandom.fill_random(&mut buf).unwrap();
/// assert_eq!(buf, [0xAB, 0xAB, 0xAB]);
/// ```
pub trait RandomSource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`](crate::Error::RandomSource) if the
    /// underlying source cannot produce bytes.
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;
}
