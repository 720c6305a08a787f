//! Position selection table
//!
//! Maps a digit position to the select-line pattern that activates exactly
//! that element. The patterns are one-hot: multiplexing is only correct if
//! at most one element sinks current at any instant.

/// Maximum number of display elements the selection table supports
pub const MAX_ELEMENTS: usize = 8;

/// On/off state of the position select lines
///
/// One bit per select line, bit N = line N. A set bit means the line is
/// logically active; electrical polarity (the reference hardware selects
/// with active-low lines) is the output driver's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectPattern(u8);

impl SelectPattern {
    /// Raw select-line bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the given select line (0..MAX_ELEMENTS) is active
    pub const fn is_active(self, line: usize) -> bool {
        self.0 & (1 << line) != 0
    }

    /// Number of active lines
    pub const fn active_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// One-hot select patterns indexed by position
///
/// Position 0 is the leftmost (most significant) element; the digit
/// decomposition in [`crate::digits`] assumes the same ordering.
static SELECT_PATTERNS: [SelectPattern; MAX_ELEMENTS] = [
    SelectPattern(0b0000_0001),
    SelectPattern(0b0000_0010),
    SelectPattern(0b0000_0100),
    SelectPattern(0b0000_1000),
    SelectPattern(0b0001_0000),
    SelectPattern(0b0010_0000),
    SelectPattern(0b0100_0000),
    SelectPattern(0b1000_0000),
];

/// Select pattern activating exactly `position`
///
/// `position` is always derived from the refresh engine, which clamps it
/// into range first; an out-of-range index here is a bug in the caller,
/// not operator input.
///
/// # Panics
///
/// If `position >= element_count` or `element_count > MAX_ELEMENTS`.
pub fn select(position: usize, element_count: usize) -> SelectPattern {
    assert!(
        position < element_count && element_count <= MAX_ELEMENTS,
        "select position out of range"
    );
    SELECT_PATTERNS[position]
}
