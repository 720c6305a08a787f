//! Serial shift register drive
//!
//! Segment state is bit-banged over a clock/data pair into a latch that
//! drives the physical segment lines. Select lines stay direct parallel
//! pins; only the segment channel is serialized.
//!
//! Wire protocol (from the reference hardware): most significant segment
//! bit first; per bit set data, settle, pulse clock low then high; after
//! the last bit one more settle, then the data line returns to its idle
//! high level.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use sevseg_core::{OutputDriver, SegmentPattern, SelectPattern, MAX_ELEMENTS, SEGMENT_COUNT};

use crate::Polarity;

/// Settling time between line transitions, in microseconds
pub const SETTLE_DELAY_US: u32 = 1;

/// Shift-register output: clock + data pins for segments, parallel selects
pub struct ShiftRegister<P, D> {
    clock: P,
    data: P,
    selects: Vec<P, MAX_ELEMENTS>,
    delay: D,
    segment_polarity: Polarity,
    select_polarity: Polarity,
}

impl<P: OutputPin, D: DelayNs> ShiftRegister<P, D> {
    /// Create the driver and blank the display
    ///
    /// Clock and data idle high, select lines idle inactive, and an all-off
    /// pattern is latched so no stale register content shows through.
    pub fn new(
        clock: P,
        data: P,
        selects: Vec<P, MAX_ELEMENTS>,
        delay: D,
        segment_polarity: Polarity,
        select_polarity: Polarity,
    ) -> Self {
        let mut driver = Self {
            clock,
            data,
            selects,
            delay,
            segment_polarity,
            select_polarity,
        };
        driver.clock.set_high().ok();
        driver.data.set_high().ok();
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

    /// Shift one bit into the register
    fn shift_bit(&mut self, high: bool) {
        if high {
            self.data.set_high().ok();
        } else {
            self.data.set_low().ok();
        }
        self.delay.delay_us(SETTLE_DELAY_US);
        self.clock.set_low().ok();
        self.delay.delay_us(SETTLE_DELAY_US);
        self.clock.set_high().ok();
    }
}

impl<P: OutputPin, D: DelayNs> OutputDriver for ShiftRegister<P, D> {
    fn deactivate(&mut self, lines: SelectPattern) {
        for (line, pin) in self.selects.iter_mut().enumerate() {
            if lines.is_active(line) {
                self.select_polarity.drive(pin, false);
            }
        }
    }

    fn write_segments(&mut self, pattern: SegmentPattern) {
        let bits = match self.segment_polarity {
            Polarity::ActiveHigh => pattern.bits(),
            Polarity::ActiveLow => !pattern.bits(),
        };

        // Most significant segment first
        for bit in (0..SEGMENT_COUNT).rev() {
            self.shift_bit(bits & (1 << bit) != 0);
        }

        self.delay.delay_us(SETTLE_DELAY_US);
        self.data.set_high().ok();
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
    use core::cell::{Cell, RefCell};
    use core::convert::Infallible;
    use sevseg_core::select;
    use std::vec::Vec as StdVec;

    const CLK: u8 = 0;
    const DATA: u8 = 1;
    const SEL_BASE: u8 = 100;

    type Log = RefCell<StdVec<(u8, bool)>>;

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

    /// Delay stub counting settle periods
    struct CountingDelay<'a>(&'a Cell<u32>);

    impl DelayNs for CountingDelay<'_> {
        fn delay_ns(&mut self, _ns: u32) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn make_driver<'a>(
        log: &'a Log,
        delays: &'a Cell<u32>,
        elements: usize,
    ) -> ShiftRegister<LogPin<'a>, CountingDelay<'a>> {
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
        ShiftRegister::new(
            LogPin { id: CLK, log },
            LogPin { id: DATA, log },
            selects,
            CountingDelay(delays),
            Polarity::ActiveLow,
            Polarity::ActiveLow,
        )
    }

    /// Extract the byte a write shifted out, from the data level at each
    /// rising clock edge
    fn shifted_byte(events: &[(u8, bool)]) -> u8 {
        let mut byte = 0u8;
        let mut data_level = true;
        for &(id, level) in events {
            match id {
                DATA => data_level = level,
                CLK if level => {
                    byte = (byte << 1) | data_level as u8;
                }
                _ => {}
            }
        }
        byte
    }

    #[test]
    fn test_shifts_msb_first() {
        let log = Log::default();
        let delays = Cell::new(0);
        let mut driver = make_driver(&log, &delays, 3);
        log.borrow_mut().clear();

        // Active-low latch: lit bits go out inverted
        driver.write_segments(SegmentPattern::from_bits(0b1010_0001));

        let events = log.borrow();
        assert_eq!(shifted_byte(&events), 0b0101_1110);
    }

    #[test]
    fn test_each_bit_gets_one_clock_pulse() {
        let log = Log::default();
        let delays = Cell::new(0);
        let mut driver = make_driver(&log, &delays, 3);
        log.borrow_mut().clear();

        driver.write_segments(SegmentPattern::from_bits(0x55));

        let events = log.borrow();
        let lows = events.iter().filter(|&&(id, lvl)| id == CLK && !lvl).count();
        let highs = events.iter().filter(|&&(id, lvl)| id == CLK && lvl).count();
        assert_eq!(lows, SEGMENT_COUNT);
        assert_eq!(highs, SEGMENT_COUNT);

        // Within each bit: data write, then clock low, then clock high
        let mut clocks = events.iter().filter(|&&(id, _)| id == CLK);
        let first_two: StdVec<bool> = clocks.by_ref().take(2).map(|&(_, lvl)| lvl).collect();
        assert_eq!(first_two, [false, true]);
    }

    #[test]
    fn test_data_returns_to_idle_high() {
        let log = Log::default();
        let delays = Cell::new(0);
        let mut driver = make_driver(&log, &delays, 3);
        log.borrow_mut().clear();

        driver.write_segments(SegmentPattern::from_bits(0xFF));

        let events = log.borrow();
        assert_eq!(*events.last().unwrap(), (DATA, true));
    }

    #[test]
    fn test_settle_delay_between_transitions() {
        let log = Log::default();
        let delays = Cell::new(0);
        let mut driver = make_driver(&log, &delays, 3);
        delays.set(0);

        driver.write_segments(SegmentPattern::OFF);

        // Two settles per bit plus the trailing one before data idles
        assert_eq!(delays.get(), 2 * SEGMENT_COUNT as u32 + 1);
    }

    #[test]
    fn test_selects_stay_parallel() {
        let log = Log::default();
        let delays = Cell::new(0);
        let mut driver = make_driver(&log, &delays, 3);
        log.borrow_mut().clear();

        driver.deactivate(select(1, 3));
        driver.activate(select(2, 3));

        // Active-low selects: deactivate drives high, activate drives low
        let events = log.borrow();
        assert_eq!(
            events.as_slice(),
            &[(SEL_BASE + 1, true), (SEL_BASE + 2, false)]
        );
    }

    #[test]
    fn test_construction_latches_blank() {
        let log = Log::default();
        let delays = Cell::new(0);
        let _driver = make_driver(&log, &delays, 2);

        let events = log.borrow();
        // Idle levels first
        assert_eq!(events[0], (CLK, true));
        assert_eq!(events[1], (DATA, true));
        // Blank pattern on an active-low latch shifts out all ones
        assert_eq!(shifted_byte(&events[2..]), 0xFF);
    }
}
