use crate::{DecodeError, JsonError};

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Boxed error returned by a machine ID resolver.
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// All errors that `flakebase` can produce.
///
/// Generating an ID never fails; errors only surface while constructing a
/// [`Node`](crate::Node) or while parsing external input.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The machine ID resolver failed. The resolver's error is kept as the
    /// source and its message is passed through unchanged.
    #[error("{0}")]
    Resolver(#[source] BoxError),

    /// The resolved machine ID does not fit the layout's machine field.
    #[error("machine id {machine} must be between 0 and {max}")]
    MachineOutOfRange {
        /// The resolved value.
        machine: i64,
        /// The largest machine ID the layout can hold.
        max: i64,
    },

    /// The clock reads earlier than the layout's epoch, so no valid timestamp
    /// can be produced.
    #[error("clock reads {now} ms, before the epoch at {epoch} ms")]
    ClockBeforeEpoch {
        /// The clock reading, in milliseconds since the Unix epoch.
        now: i64,
        /// The layout's epoch, in milliseconds since the Unix epoch.
        epoch: i64,
    },

    /// An alphabet decode failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Reading the JSON form failed.
    #[error(transparent)]
    Json(#[from] JsonError),
}
