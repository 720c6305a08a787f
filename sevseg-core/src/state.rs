//! Shared display configuration
//!
//! One owned state object holds everything the control surface writes and
//! the refresh engine reads: displayed content, element count and refresh
//! period. The firmware wraps it in a short-held blocking mutex; the
//! engine works from a [`Snapshot`] copied out under that lock so a tick
//! never sees a torn multi-field update.
//!
//! Validation discipline (applied uniformly to the numeric fields):
//! unparsable text is rejected with [`ConfigError::InvalidArgument`];
//! parsable but out-of-range input substitutes the documented default.
//! A rejected write leaves the previous configuration untouched.

use crate::digits::{capacity, digit_at};
use crate::glyph::{DigitGlyph, SegmentPattern};
use crate::select::MAX_ELEMENTS;

/// Default number of display elements
pub const DEFAULT_ELEMENT_COUNT: usize = 3;

/// Default refresh period in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 5;

/// Operator-input validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Payload did not parse as the expected integer
    InvalidArgument,
    /// Raw pattern payload length does not match the element count
    LengthMismatch,
}

/// What the display currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayContent {
    /// A non-negative number, decomposed into digits each tick
    Number(u32),
    /// The overflow sentinel: every position shows the invalid glyph
    Invalid,
    /// Raw per-position patterns, bypassing digit decoding
    Raw([SegmentPattern; MAX_ELEMENTS]),
}

/// Shared display configuration
///
/// Written by the control surface, read (as a [`Snapshot`]) by the refresh
/// engine. The engine's active position is deliberately not part of this
/// state; the engine owns it exclusively.
#[derive(Debug, Clone)]
pub struct DisplayState {
    content: DisplayContent,
    element_count: usize,
    period_ms: u32,
}

impl DisplayState {
    /// State with the documented defaults, showing zero
    pub const fn new() -> Self {
        Self {
            content: DisplayContent::Number(0),
            element_count: DEFAULT_ELEMENT_COUNT,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }

    /// Consistent copy of the fields one tick needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content,
            element_count: self.element_count,
            period_ms: self.period_ms,
        }
    }

    pub fn content(&self) -> DisplayContent {
        self.content
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Set the refresh period from a text payload (milliseconds)
    ///
    /// Non-positive values substitute [`DEFAULT_PERIOD_MS`]. Takes effect
    /// at the engine's next re-arm, not mid-cycle.
    pub fn set_period_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let period: i64 = parse_int(text)?;
        self.period_ms = if period > 0 && period <= u32::MAX as i64 {
            period as u32
        } else {
            DEFAULT_PERIOD_MS
        };
        Ok(())
    }

    /// Set the element count from a text payload
    ///
    /// Values outside `(0, MAX_ELEMENTS]` substitute
    /// [`DEFAULT_ELEMENT_COUNT`]. The engine re-clamps its active position
    /// before the next tick uses it, so a shrinking count never leaves an
    /// out-of-range position live.
    pub fn set_element_count_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let count: i64 = parse_int(text)?;
        self.element_count = if count > 0 && count <= MAX_ELEMENTS as i64 {
            count as usize
        } else {
            DEFAULT_ELEMENT_COUNT
        };
        // The stored number may no longer fit the shrunk display
        if let DisplayContent::Number(value) = self.content {
            self.set_value(value);
        }
        Ok(())
    }

    /// Set the displayed value from a text payload
    pub fn set_value_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let value: u32 = text
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidArgument)?;
        self.set_value(value);
        Ok(())
    }

    /// Set the displayed value
    ///
    /// A value too wide for the current element count is stored as the
    /// invalid sentinel, never silently truncated.
    pub fn set_value(&mut self, value: u32) {
        self.content = if (value as u64) < capacity(self.element_count) {
            DisplayContent::Number(value)
        } else {
            DisplayContent::Invalid
        };
    }

    /// Inject raw segment patterns, one byte per element
    ///
    /// The payload must be exactly `element_count` bytes long. Unwired
    /// trailing positions stay dark.
    pub fn set_raw_pattern(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        if bytes.len() != self.element_count {
            return Err(ConfigError::LengthMismatch);
        }
        let mut patterns = [SegmentPattern::OFF; MAX_ELEMENTS];
        for (pattern, &byte) in patterns.iter_mut().zip(bytes) {
            *pattern = SegmentPattern::from_bits(byte);
        }
        self.content = DisplayContent::Raw(patterns);
        Ok(())
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-tick consistent copy of the shared configuration
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub content: DisplayContent,
    pub element_count: usize,
    pub period_ms: u32,
}

impl Snapshot {
    /// Segment pattern to drive at `position` for this tick
    pub fn pattern_at(&self, position: usize) -> SegmentPattern {
        match self.content {
            DisplayContent::Number(value) => {
                digit_at(value, position, self.element_count).pattern()
            }
            DisplayContent::Invalid => DigitGlyph::Invalid.pattern(),
            DisplayContent::Raw(patterns) => patterns[position],
        }
    }
}

/// Parse a whitespace-trimmed signed integer payload
///
/// Sign and range are validated by the caller; this only rejects text that
/// is not an integer at all.
fn parse_int(text: &str) -> Result<i64, ConfigError> {
    text.trim().parse().map_err(|_| ConfigError::InvalidArgument)
}
