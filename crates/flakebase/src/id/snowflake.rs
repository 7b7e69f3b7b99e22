use crate::{DefaultLayout, Layout};
use core::{fmt, marker::PhantomData, num::ParseIntError, str::FromStr};

/// A 64-bit Snowflake ID packed according to the layout `L`.
///
/// With the [`DefaultLayout`]:
///
/// - 1 bit sign, always 0 for generated IDs
/// - 41 bits timestamp (ms since [`DEFAULT_EPOCH`])
/// - 10 bits machine ID
/// - 12 bits step
///
/// ```text
///  Bit Index:  63           63 62            22 21             12 11         0
///              +--------------+----------------+-----------------+-----------+
///  Field:      | sign (1)     | timestamp (41) | machine ID (10) | step (12) |
///              +--------------+----------------+-----------------+-----------+
///              |<----------- MSB ---------- 64 bits ----------- LSB -------->|
/// ```
///
/// Equality, ordering and hashing use the raw integer only. The canonical
/// text form is the signed decimal produced by [`fmt::Display`].
///
/// # Example
///
/// ```
/// use flakebase::SnowflakeId;
///
/// let id: SnowflakeId = SnowflakeId::from_components(1000, 5, 7);
/// assert_eq!(id.to_raw(), 4_194_324_487);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.machine(), 5);
/// assert_eq!(id.step(), 7);
/// assert_eq!(id.to_string(), "4194324487");
/// ```
///
/// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnowflakeId<L: Layout = DefaultLayout> {
    raw: i64,
    layout: PhantomData<L>,
}

impl<L: Layout> SnowflakeId<L> {
    /// Wraps a raw integer without validating it.
    pub const fn from_raw(raw: i64) -> Self {
        Self {
            raw,
            layout: PhantomData,
        }
    }

    /// Packs the three fields, masking each one to its width.
    ///
    /// `timestamp` is the delta since `L::EPOCH`, as returned by
    /// [`SnowflakeId::timestamp`].
    pub const fn from_components(timestamp: i64, machine: i64, step: i64) -> Self {
        let timestamp = (timestamp & L::MAX_TIMESTAMP) << L::TIME_SHIFT;
        let machine = (machine & L::MAX_MACHINE) << L::MACHINE_SHIFT;
        let step = step & L::STEP_MASK;
        Self::from_raw(timestamp | machine | step)
    }

    /// Returns the raw integer.
    pub const fn to_raw(&self) -> i64 {
        self.raw
    }

    /// Returns the wall-clock time the ID was issued at, in milliseconds since
    /// the Unix epoch.
    pub const fn time(&self) -> i64 {
        self.timestamp() + L::EPOCH
    }

    /// Returns the timestamp field: milliseconds since `L::EPOCH`.
    pub const fn timestamp(&self) -> i64 {
        self.raw >> L::TIME_SHIFT
    }

    /// Extracts the machine ID from the packed ID.
    pub const fn machine(&self) -> i64 {
        (self.raw & L::MACHINE_MASK) >> L::MACHINE_SHIFT
    }

    /// Extracts the per-millisecond step from the packed ID.
    pub const fn step(&self) -> i64 {
        self.raw & L::STEP_MASK
    }
}

impl<L: Layout> From<i64> for SnowflakeId<L> {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl<L: Layout> From<SnowflakeId<L>> for i64 {
    fn from(id: SnowflakeId<L>) -> Self {
        id.to_raw()
    }
}

impl<L: Layout> fmt::Display for SnowflakeId<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl<L: Layout> fmt::Debug for SnowflakeId<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("raw", &self.raw)
            .field("time", &self.time())
            .field("machine", &self.machine())
            .field("step", &self.step())
            .finish()
    }
}

/// Parses the canonical signed decimal form.
impl<L: Layout> FromStr for SnowflakeId<L> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::from_raw)
    }
}
