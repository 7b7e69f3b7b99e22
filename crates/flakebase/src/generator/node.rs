use crate::{
    BoxError, DefaultLayout, Error, Layout, Result, SnowflakeId, TimeSource, WallClock,
    generator::mutex::{Mutex, lock},
};
use core::{cmp::Ordering, convert::Infallible, fmt, marker::PhantomData, time::Duration};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// How long to sleep while the clock still reads the last used millisecond.
const SAME_TICK_WAIT: Duration = Duration::from_micros(100);

/// Upper bound on a single sleep while the clock reads earlier than the last
/// used millisecond.
const MAX_REGRESSION_WAIT: Duration = Duration::from_millis(5);

#[derive(Debug)]
struct State {
    last_timestamp: i64,
    step: i64,
}

/// A thread-safe Snowflake ID generator bound to one machine ID.
///
/// State lives behind an [`Arc<Mutex<_>>`], so clones of a node share it and
/// may be handed to other threads. Every call to [`Node::generate`] returns an
/// ID strictly greater than any ID this node (or a clone of it) issued before.
///
/// The node never fails at generation time. When the step counter is
/// exhausted within a millisecond, or the clock is observed to move
/// backwards, the calling thread sleeps until the clock passes the last used
/// millisecond.
///
/// # Example
///
/// ```
/// use flakebase::{Node, SnowflakeId};
///
/// let node: Node = Node::from_machine_id(7)?;
/// let a: SnowflakeId = node.generate();
/// let b = node.generate();
///
/// assert!(a < b);
/// assert_eq!(a.machine(), 7);
/// # Ok::<(), flakebase::Error>(())
/// ```
pub struct Node<L: Layout = DefaultLayout, C: TimeSource = WallClock> {
    machine: i64,
    state: Arc<Mutex<State>>,
    clock: C,
    layout: PhantomData<L>,
}

impl<L: Layout> Node<L, WallClock> {
    /// Creates a node on the system clock, taking its machine ID from
    /// `resolver`.
    ///
    /// # Errors
    ///
    /// - [`Error::Resolver`] if `resolver` fails
    /// - [`Error::MachineOutOfRange`] if the machine ID does not fit the
    ///   layout
    /// - [`Error::ClockBeforeEpoch`] if the system clock reads earlier than
    ///   the layout epoch
    ///
    /// # Example
    ///
    /// ```
    /// use flakebase::Node;
    ///
    /// let node: Node = Node::new(|| "42".parse::<i64>())?;
    /// assert_eq!(node.machine_id(), 42);
    /// # Ok::<(), flakebase::Error>(())
    /// ```
    pub fn new<F, E>(resolver: F) -> Result<Self>
    where
        F: FnOnce() -> Result<i64, E>,
        E: Into<BoxError>,
    {
        Self::with_clock(resolver, WallClock)
    }

    /// Creates a node on the system clock with a fixed machine ID.
    ///
    /// # Errors
    ///
    /// See [`Node::new`]; the resolver step cannot fail.
    pub fn from_machine_id(machine: i64) -> Result<Self> {
        Self::new(|| Ok::<_, Infallible>(machine))
    }
}

impl<L: Layout, C: TimeSource> Node<L, C> {
    /// Creates a node reading time from `clock`.
    ///
    /// # Errors
    ///
    /// See [`Node::new`].
    pub fn with_clock<F, E>(resolver: F, clock: C) -> Result<Self>
    where
        F: FnOnce() -> Result<i64, E>,
        E: Into<BoxError>,
    {
        let machine = resolver().map_err(|e| Error::Resolver(e.into()))?;
        if !(0..=L::MAX_MACHINE).contains(&machine) {
            return Err(Error::MachineOutOfRange {
                machine,
                max: L::MAX_MACHINE,
            });
        }

        let now = clock.current_millis();
        if now < L::EPOCH {
            return Err(Error::ClockBeforeEpoch {
                now,
                epoch: L::EPOCH,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(machine, epoch = L::EPOCH, "node ready");

        Ok(Self {
            machine,
            state: Arc::new(Mutex::new(State {
                // Seeded one tick before the epoch with the steps used up, so
                // a clock that drops below the epoch is waited out.
                last_timestamp: L::EPOCH - 1,
                step: L::STEP_MASK,
            })),
            clock,
            layout: PhantomData,
        })
    }

    /// Returns the next ID.
    ///
    /// Blocks while the current millisecond's steps are used up, or while
    /// the clock reads earlier than the last millisecond an ID was issued in
    /// (or earlier than the layout epoch, before the first ID).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> SnowflakeId<L> {
        let mut state = lock(&self.state);
        let last = state.last_timestamp;
        let mut now = self.clock.current_millis();

        let step = match now.cmp(&last) {
            Ordering::Equal => {
                let step = (state.step + 1) & L::STEP_MASK;
                if step == 0 {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(timestamp = now, "steps exhausted, waiting for next tick");
                    now = self.wait_past(last);
                }
                step
            }
            Ordering::Less => {
                #[cfg(feature = "tracing")]
                tracing::warn!(now, last, "clock moved backwards, waiting");
                now = self.wait_past(last);
                0
            }
            Ordering::Greater => 0,
        };

        state.last_timestamp = now;
        state.step = step;
        drop(state);

        let timestamp = now - L::EPOCH;
        #[cfg(feature = "tracing")]
        if timestamp > L::MAX_TIMESTAMP {
            tracing::error!(
                timestamp,
                max = L::MAX_TIMESTAMP,
                "layout timestamp range exhausted"
            );
        }
        debug_assert!(
            timestamp <= L::MAX_TIMESTAMP,
            "timestamp {timestamp} exceeds the layout's timestamp range"
        );

        SnowflakeId::from_raw(
            (timestamp << L::TIME_SHIFT) | (self.machine << L::MACHINE_SHIFT) | step,
        )
    }

    /// Sleeps until the clock reads later than `last`, returning that reading.
    fn wait_past(&self, last: i64) -> i64 {
        loop {
            let now = self.clock.current_millis();
            match now.cmp(&last) {
                Ordering::Greater => return now,
                Ordering::Equal => self.clock.sleep_for(SAME_TICK_WAIT),
                Ordering::Less => {
                    let gap = Duration::from_millis(last.abs_diff(now));
                    self.clock.sleep_for(gap.min(MAX_REGRESSION_WAIT));
                }
            }
        }
    }

    /// The machine ID stamped into every ID.
    pub const fn machine_id(&self) -> i64 {
        self.machine
    }

    /// The millisecond (since the Unix epoch) of the most recently issued ID,
    /// or `None` before the first call to [`Node::generate`].
    pub fn last_timestamp(&self) -> Option<i64> {
        let last = lock(&self.state).last_timestamp;
        (last >= L::EPOCH).then_some(last)
    }

    /// The node's time source.
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

impl<L: Layout, C: TimeSource + Clone> Clone for Node<L, C> {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine,
            state: Arc::clone(&self.state),
            clock: self.clock.clone(),
            layout: PhantomData,
        }
    }
}

impl<L: Layout, C: TimeSource> fmt::Debug for Node<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("machine", &self.machine)
            .field("last_timestamp", &self.last_timestamp())
            .finish_non_exhaustive()
    }
}
