use core::{fmt, hash::Hash};

/// A compile-time description of how a 64-bit Snowflake ID is partitioned.
///
/// A layout fixes the epoch and the widths of the machine and step fields. The
/// timestamp field takes every remaining bit below the sign bit. Every derived
/// constant (masks, shifts, maxima) is computed from those three values, so
/// they can never drift apart.
///
/// Because the layout is a type parameter of [`SnowflakeId`] and [`Node`], a
/// generator can only emit IDs of its own layout, and an ID can only be
/// decoded with the layout it was issued under.
///
/// ## Bit layout
///
/// ```text
///  Bit Index:  63         62                      S+M-1          S-1          0
///              +----------+------------------------+--------------+------------+
///  Field:      | sign (1) | timestamp (63 - M - S) | machine (M)  | step (S)   |
///              +----------+------------------------+--------------+------------+
///              |<--- MSB ------------------ 64 bits ------------------ LSB --->|
/// ```
///
/// Use [`define_layout!`] to declare a layout; it rejects unusable widths at
/// compile time.
///
/// [`SnowflakeId`]: crate::SnowflakeId
/// [`Node`]: crate::Node
/// [`define_layout!`]: crate::define_layout
pub trait Layout:
    Copy
    + Clone
    + Default
    + fmt::Debug
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Send
    + Sync
    + 'static
{
    /// Reference instant, in milliseconds since the Unix epoch, subtracted
    /// from wall-clock time before it is packed into an ID.
    ///
    /// Changing this after IDs have been issued breaks uniqueness.
    const EPOCH: i64;

    /// Width of the machine field.
    const MACHINE_BITS: u8;

    /// Width of the per-millisecond step field.
    const STEP_BITS: u8;

    /// Width of the timestamp field (everything except the sign bit).
    const TIMESTAMP_BITS: u8 = 63 - Self::MACHINE_BITS - Self::STEP_BITS;

    /// Largest representable timestamp delta.
    const MAX_TIMESTAMP: i64 = (1_i64 << Self::TIMESTAMP_BITS) - 1;

    /// Largest accepted machine identifier.
    const MAX_MACHINE: i64 = (1_i64 << Self::MACHINE_BITS) - 1;

    /// Mask selecting the machine field in place.
    const MACHINE_MASK: i64 = Self::MAX_MACHINE << Self::STEP_BITS;

    /// Mask selecting the step field in place.
    const STEP_MASK: i64 = (1_i64 << Self::STEP_BITS) - 1;

    /// Shift moving a machine identifier into its field.
    const MACHINE_SHIFT: u8 = Self::STEP_BITS;

    /// Shift moving a timestamp delta into its field.
    const TIME_SHIFT: u8 = Self::MACHINE_BITS + Self::STEP_BITS;
}

/// Declares a zero-sized [`Layout`] type.
///
/// The widths are checked at compile time: the step field needs at least one
/// bit, and the machine and step fields together may use at most 62 bits so
/// the timestamp keeps at least one bit below the sign bit.
///
/// ## Example
///
/// ```
/// use flakebase::{Layout, define_layout};
///
/// define_layout!(
///     /// 8 machine bits, 14 step bits, counted from 2024-01-01.
///     pub WideStepLayout,
///     epoch: 1_704_067_200_000,
///     machine: 8,
///     step: 14,
/// );
///
/// assert_eq!(WideStepLayout::MAX_MACHINE, 255);
/// assert_eq!(WideStepLayout::TIME_SHIFT, 22);
/// ```
#[macro_export]
macro_rules! define_layout {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident,
        epoch: $epoch:expr,
        machine: $machine_bits:expr,
        step: $step_bits:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name;

        const _: () = {
            assert!($step_bits >= 1, "layout needs at least one step bit");
            assert!(
                ($machine_bits as u32) + ($step_bits as u32) <= 62,
                "layout leaves no timestamp bits"
            );
            let epoch: i64 = $epoch;
            assert!(epoch >= 0, "layout epoch precedes the Unix epoch");
        };

        impl $crate::Layout for $name {
            const EPOCH: i64 = $epoch;
            const MACHINE_BITS: u8 = $machine_bits;
            const STEP_BITS: u8 = $step_bits;
        }
    };
}
