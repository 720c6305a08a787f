//! Digit decomposition
//!
//! Extracts the decimal digit shown at a given position of a multi-digit
//! value. Position 0 is the most significant displayed digit, matching the
//! ordering of the position selection table.

use crate::glyph::DigitGlyph;

/// Number of distinct values an `element_count`-digit display can show
///
/// Equals `10^element_count`; values at or above this do not fit and are
/// coerced to the invalid sentinel by [`crate::state::DisplayState`].
pub fn capacity(element_count: usize) -> u64 {
    pow10(element_count as u32)
}

fn pow10(n: u32) -> u64 {
    10u64.pow(n)
}

/// Glyph for the digit at `position` of `value`
///
/// The divisor is implied by how many digits sit to the right of
/// `position`. Values wider than the display never reach this function;
/// they are stored as the invalid sentinel instead.
pub fn digit_at(value: u32, position: usize, element_count: usize) -> DigitGlyph {
    debug_assert!(element_count > 0);
    debug_assert!(position < element_count);

    let divisor = pow10((element_count - position - 1) as u32);
    DigitGlyph::from_digit(((value as u64 / divisor) % 10) as u8)
}
