use crate::base58::{ALPHABET, decode_base58, encode_base58};
use crate::{OsRandom, RandomSource, Result, TimeSource, UnixClock};
use core::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A compact, time-sortable, base58-encoded unique identifier.
///
/// A `Buid` is always exactly [`LEN`](Self::LEN) ASCII characters drawn from
/// a 58-character alphabet that omits the visually ambiguous `0`, `O`, `I`,
/// and `l`. It encodes a 7-byte payload:
///
/// ```text
///  Byte Index:  0               3 4            6
///               +-----------------+------------+
///  Field:       | timestamp (4)   | random (3) |
///               +-----------------+------------+
///               |<-- MSB -- 7 bytes -- LSB --->|
/// ```
///
/// The timestamp is a big-endian `u32` of whole seconds since the Unix
/// epoch, so identifiers generated later compare greater, both as values and
/// as strings:
///
/// ```
/// use buid::Buid;
///
/// let earlier = Buid::from_components(1_600_000_000, [0xFF, 0xFF, 0xFF]);
/// let later = Buid::from_components(1_600_000_001, [0x00, 0x00, 0x00]);
/// assert!(earlier < later);
/// assert!(earlier.as_str() < later.as_str());
/// ```
///
/// # ⚠️ Note
///
/// Encoded payloads shorter than ten characters are right-padded with the
/// leading characters of the alphabet. Padding only occurs for timestamps
/// below `442_722_960` (January 1984), where it shifts the decoded value and
/// breaks the sort order against unpadded identifiers. Identifiers generated
/// from the current clock are unaffected.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Buid {
    bytes: [u8; 10],
}

impl Buid {
    /// Canonical length of an encoded identifier, in bytes and characters.
    pub const LEN: usize = 10;

    /// Payload width: a 4-byte timestamp followed by 3 random bytes.
    const PAYLOAD_LEN: usize = 7;

    /// Generates an identifier from the system wall clock and the operating
    /// system's entropy source.
    ///
    /// This convenience constructor performs a time query and an entropy
    /// read on every call. For bulk generation, or to control either input,
    /// use a [`BuidGenerator`](crate::BuidGenerator).
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`](crate::Error::RandomSource) if the
    /// entropy source fails.
    ///
    /// # Example
    ///
    /// ```
    /// let id = buid::Buid::now()?;
    /// assert_eq!(id.as_str().len(), buid::Buid::LEN);
    /// # Ok::<(), buid::Error>(())
    /// ```
    pub fn now() -> Result<Self> {
        // Whole seconds wrap modulo 2^32 in February 2106.
        let seconds = UnixClock.unix_seconds() as u32;
        let mut entropy = [0u8; 3];
        OsRandom.fill_random(&mut entropy)?;
        Ok(Self::from_components(seconds, entropy))
    }

    /// Constructs an identifier from its components: whole seconds since the
    /// Unix epoch and 3 bytes of entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use buid::Buid;
    ///
    /// let id = Buid::from_components(1_600_000_000, [0x01, 0x02, 0x03]);
    /// assert_eq!(id.as_str(), "4ccVRcGv7k");
    /// assert_eq!(id.timestamp(), 1_600_000_000);
    /// ```
    #[must_use]
    pub fn from_components(seconds: u32, entropy: [u8; 3]) -> Self {
        let mut payload = [0u8; Self::PAYLOAD_LEN];
        payload[..4].copy_from_slice(&seconds.to_be_bytes());
        payload[4..].copy_from_slice(&entropy);
        Self::normalize(&encode_base58(&payload))
    }

    /// Pads or trims an encoded string to the canonical width.
    ///
    /// Short encodings gain the leading characters of the alphabet on the
    /// right; long encodings keep their first [`LEN`](Self::LEN) characters.
    /// 7-byte payloads always encode to at most ten characters, so the trim
    /// arm is only reachable with wider input.
    pub(crate) fn normalize(encoded: &str) -> Self {
        let src = encoded.as_bytes();
        let mut bytes = [0u8; Self::LEN];
        if src.len() >= Self::LEN {
            bytes.copy_from_slice(&src[..Self::LEN]);
        } else {
            bytes[..src.len()].copy_from_slice(src);
            bytes[src.len()..].copy_from_slice(&ALPHABET[..Self::LEN - src.len()]);
        }
        Self { bytes }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        // SAFETY: `bytes` only ever holds characters of the base58 alphabet,
        // which are ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns the embedded timestamp as whole seconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        decode_timestamp(self.as_str()).1
    }

    /// Returns the embedded timestamp as a [`SystemTime`].
    ///
    /// The precision is limited to whole seconds.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        decode_timestamp(self.as_str()).0
    }
}

/// Decodes the timestamp embedded in an identifier string.
///
/// Returns the timestamp both as a [`SystemTime`] and as raw whole seconds
/// since the Unix epoch. This function is total: input that is not decodable
/// (characters outside the alphabet) or decodes to fewer than 4 payload
/// bytes yields `(UNIX_EPOCH, 0)` rather than an error, so callers can feed
/// it untrusted strings directly.
///
/// # Example
///
/// ```
/// use buid::decode_timestamp;
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let (at, seconds) = decode_timestamp("4ccVRcGv7k");
/// assert_eq!(seconds, 1_600_000_000);
/// assert_eq!(at, UNIX_EPOCH + Duration::from_secs(1_600_000_000));
///
/// let (at, seconds) = decode_timestamp("!!!invalid!!!");
/// assert_eq!(seconds, 0);
/// assert_eq!(at, UNIX_EPOCH);
/// ```
#[must_use]
pub fn decode_timestamp(id: &str) -> (SystemTime, u32) {
    let Some(payload) = decode_base58(id) else {
        return (UNIX_EPOCH, 0);
    };
    if payload.len() < 4 {
        return (UNIX_EPOCH, 0);
    }
    let seconds = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
    (UNIX_EPOCH + Duration::from_secs(u64::from(seconds)), seconds)
}

impl fmt::Display for Buid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Buid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buid")
            .field("id", &self.as_str())
            .field("timestamp", &self.timestamp())
            .finish()
    }
}

impl AsRef<str> for Buid {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Buid {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Buid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Buid> for &str {
    fn eq(&self, other: &Buid) -> bool {
        other == *self
    }
}

impl PartialEq<String> for Buid {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Buid> for String {
    fn eq(&self, other: &Buid) -> bool {
        other == self
    }
}

impl From<Buid> for String {
    fn from(val: Buid) -> Self {
        val.as_str().to_owned()
    }
}

impl From<&Buid> for String {
    fn from(val: &Buid) -> Self {
        val.as_str().to_owned()
    }
}
