//! Refresh engine
//!
//! Advances the multiplex scan by exactly one position per tick. The
//! engine owns the active position; the control surface never writes it
//! directly. Everything here is pure bookkeeping so the firmware's tick
//! body stays bounded: snapshot in, frame out, no blocking.

use crate::glyph::SegmentPattern;
use crate::select::{select, SelectPattern, MAX_ELEMENTS};
use crate::state::Snapshot;

/// Everything the output driver must commit for one tick
///
/// The driver applies the three channels in order: deselect the previous
/// position, write the segment pattern, select the new position. Writing
/// segments while the previous element is still selected would flash its
/// content onto the wrong digit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickFrame {
    /// Position lit on the previous tick
    ///
    /// After an element-count shrink this may exceed the current count;
    /// the deselect still names it so the stale line goes dark.
    pub previous: usize,
    /// Position to light this tick
    pub position: usize,
    /// Segment pattern for `position`
    pub pattern: SegmentPattern,
    /// Select pattern to deactivate (the previous position's)
    pub deselect: SelectPattern,
    /// Select pattern to activate (this position's)
    pub select: SelectPattern,
}

/// Per-tick scan state
///
/// The active position increments each tick, wrapping modulo the element
/// count. When a configuration change shrinks the count below the current
/// position, the engine re-clamps to `count - 1` before the position is
/// used, so no tick ever drives an out-of-range element. The engine
/// remembers which position it actually lit last tick; the deselect is
/// built from that record, not from scan arithmetic, so a position left
/// lit outside the shrunk range is still turned off.
#[derive(Debug)]
pub struct RefreshEngine {
    position: usize,
    lit: Option<usize>,
}

impl RefreshEngine {
    pub const fn new() -> Self {
        Self {
            position: 0,
            lit: None,
        }
    }

    /// Position the next tick will light
    pub fn position(&self) -> usize {
        self.position
    }

    /// Compute the frame for one tick and advance the scan
    pub fn tick(&mut self, snapshot: &Snapshot) -> TickFrame {
        let count = snapshot.element_count;
        debug_assert!(count > 0);

        if self.position >= count {
            self.position = count - 1;
        }
        // Before the first tick nothing is lit; deselecting the wrap-around
        // neighbour is a no-op on lines that start inactive.
        let previous = match self.lit {
            Some(lit) => lit,
            None => (self.position + count - 1) % count,
        };

        let frame = TickFrame {
            previous,
            position: self.position,
            pattern: snapshot.pattern_at(self.position),
            deselect: select(previous, MAX_ELEMENTS),
            select: select(self.position, count),
        };

        self.lit = Some(self.position);
        self.position = (self.position + 1) % count;
        frame
    }
}

impl Default for RefreshEngine {
    fn default() -> Self {
        Self::new()
    }
}
