mod encode;
mod snowflake;

pub use snowflake::*;
