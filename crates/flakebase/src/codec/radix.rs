use core::num::ParseIntError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Formats `value` in `radix` (2 to 36) with lower-case digits and a leading
/// `-` for negative values.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_radix(value: i64, radix: u32) -> String {
    assert!((2..=36).contains(&radix), "radix must be between 2 and 36");

    let radix = u64::from(radix);
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::with_capacity(65);
    loop {
        digits.push(DIGITS[(magnitude % radix) as usize]);
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push(b'-');
    }

    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Parses a signed integer written in `radix`, the inverse of
/// [`format_radix`].
///
/// # Errors
///
/// Returns the underlying [`ParseIntError`] if `input` is not a valid number
/// in `radix` or does not fit in an `i64`.
pub fn parse_radix(input: &str, radix: u32) -> Result<i64, ParseIntError> {
    i64::from_str_radix(input, radix)
}
