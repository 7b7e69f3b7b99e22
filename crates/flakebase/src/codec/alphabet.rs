use crate::codec::DecodeError;

const NO_VALUE: u8 = 0xFF;

/// Crockford's base32 symbols, without the decoding aliases.
pub static BASE32: Alphabet = Alphabet::new("0123456789ABCDEFGHJKMNPQRSTVWXYZ");

/// Base58 symbols: digits, then upper case, then lower case, skipping `0`,
/// `O`, `I` and `l`.
pub static BASE58: Alphabet =
    Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

/// Base62 symbols: digits, then upper case, then lower case.
pub static BASE62: Alphabet =
    Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// A positional-notation alphabet with its inverse lookup table.
///
/// The symbol at index `i` encodes digit `i`. The inverse table is built at
/// compile time; bytes outside the alphabet map to an internal sentinel that
/// never escapes this type, [`Alphabet::digit`] reports them as `None`.
///
/// All built-in alphabets list their symbols in ascending ASCII order, so for
/// two non-negative values whose encodings have the same length, byte-wise
/// string order matches numeric order.
#[derive(Clone, Copy)]
pub struct Alphabet {
    symbols: &'static str,
    lookup: [u8; 256],
}

impl Alphabet {
    /// Builds an alphabet from its symbols, the symbol for digit 0 first.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const` or `static`) if the
    /// alphabet has fewer than 2 or more than 254 symbols, contains a
    /// non-ASCII byte, or repeats a symbol.
    pub const fn new(symbols: &'static str) -> Self {
        let bytes = symbols.as_bytes();
        assert!(
            bytes.len() >= 2 && bytes.len() < NO_VALUE as usize,
            "alphabet size must be between 2 and 254"
        );

        let mut lookup = [NO_VALUE; 256];
        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i];
            assert!(c.is_ascii(), "alphabet symbols must be ASCII");
            assert!(lookup[c as usize] == NO_VALUE, "duplicate alphabet symbol");
            lookup[c as usize] = i as u8;
            i += 1;
        }

        Self { symbols, lookup }
    }

    /// The number of symbols, i.e. the numeric base.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn base(&self) -> u8 {
        self.symbols.len() as u8
    }

    /// The symbols in digit order.
    pub const fn symbols(&self) -> &'static str {
        self.symbols
    }

    /// Returns the digit value of `byte`, or `None` if it is not a symbol of
    /// this alphabet.
    pub const fn digit(&self, byte: u8) -> Option<u8> {
        match self.lookup[byte as usize] {
            NO_VALUE => None,
            digit => Some(digit),
        }
    }

    /// Returns true if the symbols are strictly ascending bytes.
    pub fn is_order_preserving(&self) -> bool {
        self.symbols.as_bytes().windows(2).all(|w| w[0] < w[1])
    }

    /// Encodes `value` most significant digit first.
    ///
    /// There is no padding: the encoding of zero is the single symbol for
    /// digit 0.
    ///
    /// # Example
    ///
    /// ```
    /// use flakebase::BASE62;
    ///
    /// assert_eq!(BASE62.encode(61), "z");
    /// assert_eq!(BASE62.encode(62), "10");
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(&self, mut value: u64) -> String {
        let symbols = self.symbols.as_bytes();
        let base = u64::from(self.base());
        if value < base {
            return char::from(symbols[value as usize]).to_string();
        }

        let mut digits = Vec::with_capacity(64);
        while value >= base {
            digits.push(symbols[(value % base) as usize]);
            value /= base;
        }
        digits.push(symbols[value as usize]);

        digits.iter().rev().map(|&b| char::from(b)).collect()
    }

    /// Decodes `input` by left-to-right accumulation.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Empty`] if `input` is empty
    /// - [`DecodeError::InvalidByte`] for the first byte that is not a symbol
    ///   of this alphabet
    /// - [`DecodeError::Overflow`] if the value does not fit in a `u64`
    ///
    /// # Example
    ///
    /// ```
    /// use flakebase::{BASE58, DecodeError};
    ///
    /// assert_eq!(BASE58.decode(b"21"), Ok(58));
    /// assert_eq!(
    ///     BASE58.decode(b"10"),
    ///     Err(DecodeError::InvalidByte { base: 58, byte: b'0', index: 1 })
    /// );
    /// ```
    pub fn decode(&self, input: &[u8]) -> Result<u64, DecodeError> {
        let base = self.base();
        if input.is_empty() {
            return Err(DecodeError::Empty { base });
        }

        input
            .iter()
            .enumerate()
            .try_fold(0_u64, |acc, (index, &byte)| {
                let digit = self
                    .digit(byte)
                    .ok_or(DecodeError::InvalidByte { base, byte, index })?;
                acc.checked_mul(u64::from(base))
                    .and_then(|acc| acc.checked_add(u64::from(digit)))
                    .ok_or(DecodeError::Overflow { base })
            })
    }
}

impl core::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Alphabet")
            .field("base", &self.base())
            .field("symbols", &self.symbols)
            .finish()
    }
}
