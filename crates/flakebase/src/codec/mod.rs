mod alphabet;
mod error;
mod radix;

pub use alphabet::*;
pub use error::*;
pub use radix::*;
