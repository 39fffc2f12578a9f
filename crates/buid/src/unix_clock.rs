use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by the system wall clock.
///
/// Each call queries [`SystemTime::now`]. Wall-clock adjustments (NTP steps,
/// manual changes) are visible to callers; identifiers embed whatever the
/// clock reports at the moment of generation.
#[derive(Default, Clone, Debug)]
pub struct UnixClock;

impl TimeSource for UnixClock {
    fn unix_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            .as_secs()
    }
}
