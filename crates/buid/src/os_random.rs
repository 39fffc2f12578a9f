use crate::{Error, RandomSource, Result};
use rand::{TryRngCore, rngs::OsRng};

/// A [`RandomSource`] that reads directly from the operating system's
/// entropy source.
///
/// Every call performs a syscall (or equivalent), so it is slower than
/// [`ThreadRandom`] but carries no process-local state. Use it when each
/// identifier's entropy should come straight from the OS.
///
/// [`ThreadRandom`]: crate::ThreadRandom
#[derive(Default, Clone, Debug)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| Error::RandomSource {
            context: e.to_string(),
        })
    }
}
