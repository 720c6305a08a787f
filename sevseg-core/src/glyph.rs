//! Segment encoding table
//!
//! Maps digit glyphs to the on/off state of the eight display segments.
//! The table is data, not logic: the patterns encode how the segments are
//! physically wired, so they are kept auditable as constants and shared by
//! both output strategies.

/// Number of segments per display element (a..g plus decimal point)
pub const SEGMENT_COUNT: usize = 8;

/// On/off state of the segments composing one displayed character
///
/// One bit per segment: bit 0 = segment a through bit 6 = segment g,
/// bit 7 = decimal point. A set bit means the segment is logically lit;
/// electrical polarity is the output driver's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Pattern with every segment off
    pub const OFF: SegmentPattern = SegmentPattern(0);

    /// Create a pattern from raw segment bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw segment bits (bit 0 = a .. bit 7 = dp)
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the given segment (0..SEGMENT_COUNT) is lit
    pub const fn is_lit(self, segment: usize) -> bool {
        self.0 & (1 << segment) != 0
    }

    /// Number of lit segments
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// A displayable character: the ten decimal digits plus the invalid glyph
///
/// `Invalid` is shown on every position when the configured value does not
/// fit the display. It is a regular glyph with its own pattern (a dash),
/// not a failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DigitGlyph {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Invalid,
}

/// Segment patterns indexed by glyph discriminant
///
/// Conventional seven-segment wiring:
///
/// ```text
///   aaa
///  f   b
///   ggg
///  e   c
///   ddd  dp
/// ```
static GLYPH_PATTERNS: [SegmentPattern; 11] = [
    SegmentPattern::from_bits(0x3F), // 0: abcdef
    SegmentPattern::from_bits(0x06), // 1: bc
    SegmentPattern::from_bits(0x5B), // 2: abdeg
    SegmentPattern::from_bits(0x4F), // 3: abcdg
    SegmentPattern::from_bits(0x66), // 4: bcfg
    SegmentPattern::from_bits(0x6D), // 5: acdfg
    SegmentPattern::from_bits(0x7D), // 6: acdefg
    SegmentPattern::from_bits(0x07), // 7: abc
    SegmentPattern::from_bits(0x7F), // 8: abcdefg
    SegmentPattern::from_bits(0x6F), // 9: abcdfg
    SegmentPattern::from_bits(0x40), // invalid: dash (g only)
];

impl DigitGlyph {
    /// Glyph for a single decimal digit; anything above 9 is `Invalid`
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => DigitGlyph::Zero,
            1 => DigitGlyph::One,
            2 => DigitGlyph::Two,
            3 => DigitGlyph::Three,
            4 => DigitGlyph::Four,
            5 => DigitGlyph::Five,
            6 => DigitGlyph::Six,
            7 => DigitGlyph::Seven,
            8 => DigitGlyph::Eight,
            9 => DigitGlyph::Nine,
            _ => DigitGlyph::Invalid,
        }
    }

    /// Encode this glyph as a segment pattern (total function)
    pub fn pattern(self) -> SegmentPattern {
        GLYPH_PATTERNS[self as usize]
    }
}
