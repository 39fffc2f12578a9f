/// A source of wall-clock time, reported as whole seconds since the Unix
/// epoch.
///
/// Implement this to control the timestamp that goes into generated
/// identifiers, e.g. to freeze or step time in tests.
///
/// # Example
///
/// ```
/// use buid::TimeSource;
///
/// struct FixedTime(u64);
///
/// impl TimeSource for FixedTime {
///     fn unix_seconds(&self) -> u64 {
///         self.0
///     }
/// }
///
/// assert_eq!(FixedTime(1_600_000_000).unix_seconds(), 1_600_000_000);
/// ```
pub trait TimeSource {
    /// Returns the current time in whole seconds since the Unix epoch.
    fn unix_seconds(&self) -> u64;
}
