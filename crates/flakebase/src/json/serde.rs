use crate::{JsonError, Layout, SnowflakeId};
use core::{fmt, marker::PhantomData};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Serializes as the quoted decimal string, the same text
/// [`SnowflakeId::to_json`] writes.
impl<L: Layout> Serialize for SnowflakeId<L> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Deserializes from a decimal string. Bare numbers are rejected, the same
/// way [`SnowflakeId::from_json`] rejects unquoted input.
impl<'de, L: Layout> Deserialize<'de> for SnowflakeId<L> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct DecimalVisitor<L>(PhantomData<L>);

        impl<L: Layout> de::Visitor<'_> for DecimalVisitor<L> {
            type Value = SnowflakeId<L>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a snowflake ID as a decimal string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.is_empty() {
                    return Err(E::custom(JsonError::Syntax {
                        raw: b"\"\"".to_vec(),
                    }));
                }
                v.parse().map_err(|e| E::custom(JsonError::Parse(e)))
            }
        }

        d.deserialize_str(DecimalVisitor(PhantomData))
    }
}

/// Serde adapter for storing an ID as a bare integer, for formats or schemas
/// where 64-bit integers are safe.
///
/// ```
/// use flakebase::{SnowflakeId, as_int};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_int")]
///     id: SnowflakeId,
/// }
/// ```
pub mod as_int {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::{Layout, SnowflakeId};

    /// Serializes the raw `i64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<L, S>(id: &SnowflakeId<L>, s: S) -> Result<S::Ok, S::Error>
    where
        L: Layout,
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserializes a raw `i64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the value
    /// does not fit in an `i64`.
    pub fn deserialize<'de, L, D>(d: D) -> Result<SnowflakeId<L>, D::Error>
    where
        L: Layout,
        D: Deserializer<'de>,
    {
        i64::deserialize(d).map(SnowflakeId::from_raw)
    }
}
