mod mutex;
mod node;
#[cfg(test)]
mod tests;

pub use node::*;
