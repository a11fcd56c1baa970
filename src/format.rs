//! Fixed-point display helpers.
//!
//! A pin value composes to a plain integer; the decimal count only says
//! how many of its trailing digits are fractional. These helpers apply
//! that convention for display.

use core::fmt::{self, Write};

use crate::pin::value::PinValue;

/// `10^num_decimals`, saturating at `u32::MAX`.
pub fn scale(num_decimals: usize) -> u32 {
    u32::try_from(num_decimals)
        .ok()
        .and_then(|exp| 10u32.checked_pow(exp))
        .unwrap_or(u32::MAX)
}

/// Split `value` into its integer and fractional parts.
pub fn split_decimal(value: u32, num_decimals: usize) -> (u32, u32) {
    let scale = scale(num_decimals);
    (value / scale, value % scale)
}

/// Write `value` as `int.frac`, zero-padding the fraction to
/// `num_decimals` digits. Whole numbers are written without a point.
pub fn write_fixed(out: &mut impl Write, value: u32, num_decimals: usize) -> fmt::Result {
    if num_decimals == 0 {
        return write!(out, "{}", value);
    }
    let (whole, frac) = split_decimal(value, num_decimals);
    write!(out, "{}.{:0width$}", whole, frac, width = num_decimals)
}

/// Write a finished pin value using its own decimal count.
pub fn write_pin(out: &mut impl Write, pin: &PinValue) -> fmt::Result {
    write_fixed(out, pin.to_integer(), pin.num_decimals())
}
