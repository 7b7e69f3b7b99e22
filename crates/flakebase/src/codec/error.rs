/// Errors produced while decoding a base32, base58 or base62 string.
///
/// Every variant carries the base that was expected, so callers can tell
/// which alphabet rejected the input. Decoding never returns a partial value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input contains a byte that is not a symbol of the alphabet.
    #[error("invalid base{base}: byte {byte:#04x} at index {index} is not in the alphabet")]
    InvalidByte {
        /// The expected base.
        base: u8,
        /// The offending byte.
        byte: u8,
        /// Position of the offending byte in the input.
        index: usize,
    },

    /// The decoded value does not fit in 64 bits.
    #[error("invalid base{base}: value overflows 64 bits")]
    Overflow {
        /// The expected base.
        base: u8,
    },

    /// The input is empty.
    #[error("invalid base{base}: empty input")]
    Empty {
        /// The expected base.
        base: u8,
    },
}

impl DecodeError {
    /// The base of the alphabet that rejected the input.
    pub const fn base(&self) -> u8 {
        match self {
            Self::InvalidByte { base, .. } | Self::Overflow { base } | Self::Empty { base } => {
                *base
            }
        }
    }
}
