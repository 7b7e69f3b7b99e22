use anyhow::Context;
use clap::ValueEnum;
use flakebase::SnowflakeId;

/// A text encoding of an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Signed decimal, the canonical form.
    Decimal,
    /// Signed binary.
    Base2,
    /// Crockford base32, upper case.
    Base32,
    /// Signed base36, lower case.
    Base36,
    /// Base58 without `0`, `O`, `I` or `l`.
    Base58,
    /// Base62: digits, upper case, lower case.
    Base62,
    /// Quoted decimal.
    Json,
    /// 16 lower-case hex digits of the big-endian bytes.
    Hex,
}

impl Format {
    pub fn render(self, id: SnowflakeId) -> String {
        match self {
            Self::Decimal => id.to_string(),
            Self::Base2 => id.base2(),
            Self::Base32 => id.base32(),
            Self::Base36 => id.base36(),
            Self::Base58 => id.base58(),
            Self::Base62 => id.base62(),
            Self::Json => String::from_utf8_lossy(&id.to_json()).into_owned(),
            Self::Hex => id
                .to_be_bytes()
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect(),
        }
    }

    pub fn parse(self, text: &str) -> anyhow::Result<SnowflakeId> {
        let id = match self {
            Self::Decimal => text.parse()?,
            Self::Base2 => SnowflakeId::parse_base2(text)?,
            Self::Base32 => SnowflakeId::parse_base32(text.as_bytes())?,
            Self::Base36 => SnowflakeId::parse_base36(text)?,
            Self::Base58 => SnowflakeId::parse_base58(text.as_bytes())?,
            Self::Base62 => SnowflakeId::parse_base62(text.as_bytes())?,
            Self::Json => SnowflakeId::from_json(text.as_bytes())?,
            Self::Hex => {
                if text.len() != 16 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
                    anyhow::bail!("hex ID must be exactly 16 hex digits, got {text:?}");
                }
                let raw = u64::from_str_radix(text, 16).context("invalid hex ID")?;
                SnowflakeId::from_be_bytes(raw.to_be_bytes())
            }
        };
        Ok(id)
    }
}
