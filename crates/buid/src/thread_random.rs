use crate::{RandomSource, Result};
use rand::{RngCore, rng};

/// A [`RandomSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically, so filling bytes never fails and
/// costs no syscall on the hot path.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free and safe. This type does **not** store the RNG
/// itself; it simply accesses the thread-local generator on each call.
///
/// ⚠️ NOTE: The underlying `ThreadRng` is not `Send` or `Sync`, meaning it
/// cannot be shared or moved across threads. However, since this type is a
/// zero-sized wrapper that does not store the RNG, it **is** thread-safe and
/// may be freely used across threads.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        rng().fill_bytes(buf);
        Ok(())
    }
}
