use crate::{
    Alphabet, BASE32, BASE58, BASE62, DecodeError, Layout, SnowflakeId, format_radix, parse_radix,
};
use core::num::ParseIntError;

/// Text and byte encodings.
///
/// The alphabet encodings (`base32`, `base58`, `base62`) treat the raw bits as
/// an unsigned 64-bit integer, so every value round-trips. For the
/// non-negative values a generator produces, two encodings of equal length
/// compare byte-wise in the same order as the IDs themselves.
impl<L: Layout> SnowflakeId<L> {
    /// Encodes the raw bits with `alphabet`, most significant digit first.
    #[allow(clippy::cast_sign_loss)]
    pub fn encode_with(&self, alphabet: &Alphabet) -> String {
        alphabet.encode(self.to_raw() as u64)
    }

    /// Decodes an ID previously encoded with `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] naming the expected base if `input` is
    /// empty, contains a byte outside `alphabet`, or overflows 64 bits.
    #[allow(clippy::cast_possible_wrap)]
    pub fn decode_with(alphabet: &Alphabet, input: &[u8]) -> Result<Self, DecodeError> {
        alphabet.decode(input).map(|raw| Self::from_raw(raw as i64))
    }

    /// Signed binary representation, e.g. `-101`.
    pub fn base2(&self) -> String {
        format_radix(self.to_raw(), 2)
    }

    /// Parses the output of [`SnowflakeId::base2`].
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`].
    pub fn parse_base2(input: &str) -> Result<Self, ParseIntError> {
        parse_radix(input, 2).map(Self::from_raw)
    }

    /// Signed base36 representation with lower-case digits.
    pub fn base36(&self) -> String {
        format_radix(self.to_raw(), 36)
    }

    /// Parses the output of [`SnowflakeId::base36`].
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`].
    pub fn parse_base36(input: &str) -> Result<Self, ParseIntError> {
        parse_radix(input, 36).map(Self::from_raw)
    }

    /// Encodes with the [`BASE32`] alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use flakebase::SnowflakeId;
    ///
    /// let id: SnowflakeId = SnowflakeId::from_raw(4_194_324_487);
    /// assert_eq!(id.base32(), "3X00M07");
    /// ```
    pub fn base32(&self) -> String {
        self.encode_with(&BASE32)
    }

    /// Decodes a [`SnowflakeId::base32`] string.
    ///
    /// # Errors
    ///
    /// See [`SnowflakeId::decode_with`].
    pub fn parse_base32(input: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with(&BASE32, input)
    }

    /// Encodes with the [`BASE58`] alphabet.
    pub fn base58(&self) -> String {
        self.encode_with(&BASE58)
    }

    /// Decodes a [`SnowflakeId::base58`] string.
    ///
    /// # Errors
    ///
    /// See [`SnowflakeId::decode_with`].
    pub fn parse_base58(input: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with(&BASE58, input)
    }

    /// Encodes with the [`BASE62`] alphabet.
    pub fn base62(&self) -> String {
        self.encode_with(&BASE62)
    }

    /// Decodes a [`SnowflakeId::base62`] string.
    ///
    /// # Errors
    ///
    /// See [`SnowflakeId::decode_with`].
    pub fn parse_base62(input: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with(&BASE62, input)
    }

    /// The decimal text form as bytes, for text transports.
    ///
    /// Not to be confused with [`SnowflakeId::to_be_bytes`].
    pub fn decimal_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Fixed-width big-endian bytes of the raw integer, for binary
    /// transports.
    pub const fn to_be_bytes(&self) -> [u8; 8] {
        self.to_raw().to_be_bytes()
    }

    /// Inverse of [`SnowflakeId::to_be_bytes`].
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::from_raw(i64::from_be_bytes(bytes))
    }

    /// Standard base64 of the decimal text form.
    #[cfg_attr(docsrs, doc(cfg(feature = "base64")))]
    #[cfg(feature = "base64")]
    pub fn base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose::STANDARD};

        STANDARD.encode(self.decimal_bytes())
    }
}
