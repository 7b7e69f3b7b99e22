mod codec;
mod error;
mod generator;
mod id;
mod json;
mod layout;
mod time;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::json::*;
pub use crate::layout::*;
pub use crate::time::*;
