use core::time::Duration;

/// Default epoch: Friday, March 22, 2019 10:00:00 UTC
pub const DEFAULT_EPOCH: i64 = 1_553_248_800_000;

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
pub const TWITTER_EPOCH: i64 = 1_288_834_974_657;

/// A trait for time sources that report wall-clock milliseconds.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests. Readings are milliseconds since the Unix epoch; the
/// generator subtracts the layout epoch itself.
///
/// Readings are allowed to go backwards. The generator absorbs regressions by
/// waiting, and uses [`TimeSource::sleep_for`] to do so.
///
/// # Example
///
/// ```
/// use flakebase::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> i64;

    /// Blocks the calling thread while waiting for the clock to advance.
    ///
    /// Called with the generator lock held, always followed by a fresh
    /// [`TimeSource::current_millis`] reading.
    fn sleep_for(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }

    fn sleep_for(&self, dur: Duration) {
        (**self).sleep_for(dur);
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }

    fn sleep_for(&self, dur: Duration) {
        (**self).sleep_for(dur);
    }
}
