mod error;
mod framing;
#[cfg(feature = "serde")]
mod serde;

pub use error::*;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub use self::serde::*;
