//! Output driver trait
//!
//! Implemented by the strategy crates (parallel line drive, serial shift
//! register). The refresh engine is strategy-agnostic: it hands the driver
//! one [`TickFrame`] per tick and expects the physical display state to be
//! fully committed by the time `commit` returns.

use crate::glyph::SegmentPattern;
use crate::refresh::TickFrame;
use crate::select::SelectPattern;

/// Hardware-facing output channels for one display
pub trait OutputDriver {
    /// Drive the given select lines to their inactive level
    fn deactivate(&mut self, lines: SelectPattern);

    /// Commit a segment pattern to the segment channel
    fn write_segments(&mut self, pattern: SegmentPattern);

    /// Drive the given select lines to their active level
    fn activate(&mut self, lines: SelectPattern);

    /// Commit one tick's frame
    ///
    /// The order is mandatory: deselect the previous position first, then
    /// write the new content, then select the new position. Anything else
    /// ghosts the new digit onto the previous element.
    fn commit(&mut self, frame: &TickFrame) {
        self.deactivate(frame.deselect);
        self.write_segments(frame.pattern);
        self.activate(frame.select);
    }
}
