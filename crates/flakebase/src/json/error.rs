use core::num::ParseIntError;

/// Errors produced while reading the JSON form of an ID.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum JsonError {
    /// The input is not a quoted string with at least one character inside.
    ///
    /// `raw` echoes the rejected input for diagnostics.
    #[error("invalid snowflake ID {:?}", String::from_utf8_lossy(.raw))]
    Syntax {
        /// The rejected input, verbatim.
        raw: Vec<u8>,
    },

    /// The quoted text is not a base-10 signed 64-bit integer.
    #[error(transparent)]
    Parse(#[from] ParseIntError),
}
