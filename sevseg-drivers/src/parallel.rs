//! Parallel line drive
//!
//! One dedicated output pin per segment and per select line. Applying a
//! pattern is a fixed number of pin writes, so the whole tick commit is
//! O(1) and safe to run in a context that must not block.

use embedded_hal::digital::OutputPin;
use heapless::Vec;

use sevseg_core::{OutputDriver, SegmentPattern, SelectPattern, MAX_ELEMENTS, SEGMENT_COUNT};

use crate::Polarity;

/// Direct-drive output: eight segment pins plus one select pin per element
///
/// The select bank may be wired with fewer than `MAX_ELEMENTS` pins; select
/// lines beyond the wired bank are silently skipped, leaving those
/// positions dark rather than faulting the scan.
pub struct ParallelDrive<P> {
    segments: [P; SEGMENT_COUNT],
    selects: Vec<P, MAX_ELEMENTS>,
    segment_polarity: Polarity,
    select_polarity: Polarity,
}

impl<P: OutputPin> ParallelDrive<P> {
    /// Create the driver and blank the display
    ///
    /// All select lines are driven inactive and all segments off before
    /// the first tick, so no stale hardware state shows through.
    pub fn new(
        segments: [P; SEGMENT_COUNT],
        selects: Vec<P, MAX_ELEMENTS>,
        segment_polarity: Polarity,
        select_polarity: Polarity,
    ) -> Self {
        let mut driver = Self {
            segments,
            selects,
            segment_polarity,
            select_polarity,
        };
        for pin in driver.selects.iter_mut() {
            select_polarity.drive(pin, false);
        }
        driver.write_segments(SegmentPattern::OFF);
        driver
    }

    /// Number of wired select lines
    pub fn wired_elements(&self) -> usize {
        self.selects.len()
    }
}

impl<P: OutputPin> OutputDriver for ParallelDrive<P> {
    fn deactivate(&mut self, lines: SelectPattern) {
        for (line, pin) in self.selects.iter_mut().enumerate() {
            if lines.is_active(line) {
                self.select_polarity.drive(pin, false);
            }
        }
    }

    fn write_segments(&mut self, pattern: SegmentPattern) {
        for (segment, pin) in self.segments.iter_mut().enumerate() {
            self.segment_polarity.drive(pin, pattern.is_lit(segment));
        }
    }

    fn activate(&mut self, lines: SelectPattern) {
        for (line, pin) in self.selects.iter_mut().enumerate() {
            if lines.is_active(line) {
                self.select_polarity.drive(pin, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use sevseg_core::{select, DigitGlyph, RefreshEngine, DisplayState};
    use std::vec::Vec as StdVec;

    /// Pin ids used by the test rig
    const SEG_BASE: u8 = 0;
    const SEL_BASE: u8 = 100;

    type Log = RefCell<StdVec<(u8, bool)>>;

    /// Mock pin recording (id, level) into a shared log
    struct LogPin<'a> {
        id: u8,
        log: &'a Log,
    }

    impl embedded_hal::digital::ErrorType for LogPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for LogPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.id, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.id, true));
            Ok(())
        }
    }

    fn make_driver<'a>(log: &'a Log, elements: usize) -> ParallelDrive<LogPin<'a>> {
        let segments = core::array::from_fn(|i| LogPin {
            id: SEG_BASE + i as u8,
            log,
        });
        let mut selects = Vec::new();
        for i in 0..elements {
            selects
                .push(LogPin {
                    id: SEL_BASE + i as u8,
                    log,
                })
                .ok()
                .unwrap();
        }
        ParallelDrive::new(segments, selects, Polarity::ActiveHigh, Polarity::ActiveLow)
    }

    #[test]
    fn test_construction_blanks_display() {
        let log = Log::default();
        let _driver = make_driver(&log, 3);

        let events = log.borrow();
        // Active-low selects idle high
        for i in 0..3 {
            assert!(events.contains(&(SEL_BASE + i, true)));
        }
        // Active-high segments idle low
        for i in 0..SEGMENT_COUNT as u8 {
            assert!(events.contains(&(SEG_BASE + i, false)));
        }
    }

    #[test]
    fn test_write_segments_matches_pattern() {
        let log = Log::default();
        let mut driver = make_driver(&log, 3);
        log.borrow_mut().clear();

        driver.write_segments(DigitGlyph::One.pattern()); // bc = bits 1 and 2

        let events = log.borrow();
        assert_eq!(events.len(), SEGMENT_COUNT);
        assert!(events.contains(&(SEG_BASE + 1, true)));
        assert!(events.contains(&(SEG_BASE + 2, true)));
        assert!(events.contains(&(SEG_BASE, false)));
        assert!(events.contains(&(SEG_BASE + 7, false)));
    }

    #[test]
    fn test_commit_order_deselect_then_segments_then_select() {
        let log = Log::default();
        let mut driver = make_driver(&log, 3);

        let mut engine = RefreshEngine::new();
        let state = DisplayState::new();
        let frame = engine.tick(&state.snapshot());
        log.borrow_mut().clear();

        driver.commit(&frame);

        let events = log.borrow();
        // Previous position (2, wrapped) deselected first: active-low -> high
        assert_eq!(events[0], (SEL_BASE + 2, true));
        // Then the eight segment writes
        assert_eq!(events.len(), 1 + SEGMENT_COUNT + 1);
        // Finally position 0 selected: active-low -> low
        assert_eq!(events[events.len() - 1], (SEL_BASE, false));
    }

    #[test]
    fn test_activate_drives_only_named_line() {
        let log = Log::default();
        let mut driver = make_driver(&log, 4);
        log.borrow_mut().clear();

        driver.activate(select(2, 4));

        let events = log.borrow();
        assert_eq!(events.as_slice(), &[(SEL_BASE + 2, false)]);
    }

    #[test]
    fn test_unwired_position_is_skipped() {
        // Config allows up to MAX_ELEMENTS even when fewer pins are wired
        let log = Log::default();
        let mut driver = make_driver(&log, 2);
        log.borrow_mut().clear();

        driver.activate(select(5, 8));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_active_high_select_polarity() {
        let log = Log::default();
        let segments = core::array::from_fn(|i| LogPin {
            id: SEG_BASE + i as u8,
            log: &log,
        });
        let mut selects = Vec::new();
        selects.push(LogPin { id: SEL_BASE, log: &log }).ok().unwrap();
        let mut driver =
            ParallelDrive::new(segments, selects, Polarity::ActiveHigh, Polarity::ActiveHigh);
        log.borrow_mut().clear();

        driver.activate(select(0, 1));
        assert_eq!(log.borrow().as_slice(), &[(SEL_BASE, true)]);
    }
}
