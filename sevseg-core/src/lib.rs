//! Board-agnostic core logic for the sevseg multiplexed display driver
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment encoding table (digit glyph -> segment pattern)
//! - Position selection table (digit position -> select-line pattern)
//! - Digit decomposition of multi-digit values
//! - Shared display configuration with operator-input validation
//! - The refresh engine that advances one position per tick
//! - The output driver trait implemented by the strategy crates

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod digits;
pub mod glyph;
pub mod refresh;
pub mod select;
pub mod state;
pub mod traits;

pub use digits::{capacity, digit_at};
pub use glyph::{DigitGlyph, SegmentPattern, SEGMENT_COUNT};
pub use refresh::{RefreshEngine, TickFrame};
pub use select::{select, SelectPattern, MAX_ELEMENTS};
pub use state::{
    ConfigError, DisplayContent, DisplayState, Snapshot, DEFAULT_ELEMENT_COUNT, DEFAULT_PERIOD_MS,
};
pub use traits::OutputDriver;
