use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// The system wall clock, truncated to whole milliseconds.
///
/// Unlike a monotonic timer this follows NTP corrections and manual
/// adjustments, so readings may jump backwards. [`Node`] compensates by
/// waiting for the clock to catch up.
///
/// [`Node`]: crate::Node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            // Clock set before 1970
            Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        }
    }
}
