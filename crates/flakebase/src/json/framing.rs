use crate::{JsonError, Layout, SnowflakeId};

/// JSON framing.
///
/// IDs travel as quoted decimal strings rather than bare numbers, so that
/// consumers whose number type is an IEEE double do not lose precision.
impl<L: Layout> SnowflakeId<L> {
    /// Returns the JSON form: the decimal text wrapped in double quotes.
    ///
    /// # Example
    ///
    /// ```
    /// use flakebase::SnowflakeId;
    ///
    /// let id: SnowflakeId = SnowflakeId::from_raw(123_456_789_012_345);
    /// assert_eq!(id.to_json(), b"\"123456789012345\"");
    /// ```
    pub fn to_json(&self) -> Vec<u8> {
        format!("\"{self}\"").into_bytes()
    }

    /// Reads the JSON form produced by [`SnowflakeId::to_json`].
    ///
    /// # Errors
    ///
    /// - [`JsonError::Syntax`] unless `input` is at least three bytes long
    ///   and starts and ends with `"`
    /// - [`JsonError::Parse`] if the quoted text is not a base-10 `i64`
    pub fn from_json(input: &[u8]) -> Result<Self, JsonError> {
        match input {
            [b'"', inner @ .., b'"'] if !inner.is_empty() => {
                let id = String::from_utf8_lossy(inner).parse()?;
                Ok(Self::from_raw(id))
            }
            _ => Err(JsonError::Syntax {
                raw: input.to_vec(),
            }),
        }
    }
}
