mod interface;

pub use interface::*;

use crate::time::{DEFAULT_EPOCH, TWITTER_EPOCH};

crate::define_layout!(
    /// The default layout: 41 timestamp bits counted from
    /// 2019-03-22T10:00:00Z, 10 machine bits and 12 step bits.
    ///
    /// That leaves about 69 years of range before the sign bit is reached.
    pub DefaultLayout,
    epoch: DEFAULT_EPOCH,
    machine: 10,
    step: 12,
);

crate::define_layout!(
    /// Twitter's layout: 41 timestamp bits counted from [`TWITTER_EPOCH`],
    /// 10 machine bits and 12 step bits.
    pub TwitterLayout,
    epoch: TWITTER_EPOCH,
    machine: 10,
    step: 12,
);
