#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Buid, RandomSource, Result, TimeSource};

/// A stateless identifier generator with injected time and entropy sources.
///
/// Each call reads the clock, draws 3 bytes of entropy, and encodes the
/// result. The generator holds no interior state, so a shared reference can
/// be used from any number of threads.
///
/// ## Features
/// - ✅ Thread-safe (shared references, no interior state)
/// - ✅ Time-ordered (whole-second precision)
/// - ⚠️ 3 bytes of entropy per second: collision probability grows quickly
///   past a few thousand identifiers per second
///
/// ## Recommended When
/// - You want to pick the entropy source once (e.g. [`OsRandom`] versus
///   [`ThreadRandom`]) instead of per call
/// - You need to substitute a mock clock or RNG in tests
///
/// [`OsRandom`]: crate::OsRandom
/// [`ThreadRandom`]: crate::ThreadRandom
pub struct BuidGenerator<T, R>
where
    T: TimeSource,
    R: RandomSource,
{
    time: T,
    rng: R,
}

impl<T, R> BuidGenerator<T, R>
where
    T: TimeSource,
    R: RandomSource,
{
    /// Creates a new [`BuidGenerator`] with the provided time source and RNG.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used to retrieve the current timestamp
    /// - `rng`: A [`RandomSource`] used to draw entropy bytes
    ///
    /// # Example
    /// ```
    /// use buid::{BuidGenerator, ThreadRandom, UnixClock};
    ///
    /// let generator = BuidGenerator::new(UnixClock, ThreadRandom);
    ///
    /// let id = generator.generate()?;
    /// assert_eq!(id.as_str().len(), buid::Buid::LEN);
    /// # Ok::<(), buid::Error>(())
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`](crate::Error::RandomSource) if the
    /// entropy source fails. [`ThreadRandom`](crate::ThreadRandom) never
    /// fails; [`OsRandom`](crate::OsRandom) can.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<Buid> {
        // Whole seconds wrap modulo 2^32 in February 2106.
        let seconds = self.time.unix_seconds() as u32;
        let mut entropy = [0u8; 3];
        self.rng.fill_random(&mut entropy)?;
        Ok(Buid::from_components(seconds, entropy))
    }
}
