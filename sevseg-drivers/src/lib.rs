//! Output strategy implementations
//!
//! This crate provides the two interchangeable hardware-facing strategies
//! behind the `OutputDriver` trait from sevseg-core:
//!
//! - Parallel line drive (one dedicated pin per segment and per select line)
//! - Serial shift register (segments bit-banged over a clock/data pair)
//!
//! Drivers are generic over `embedded-hal` 1.0 output pins. Pin errors are
//! never retried or surfaced from the tick path; a failed toggle degrades
//! one refresh, the next tick proceeds regardless.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod parallel;
pub mod shift;

pub use parallel::ParallelDrive;
pub use shift::ShiftRegister;

use embedded_hal::digital::OutputPin;

/// Electrical polarity of a logically-active line
///
/// Common-cathode displays source segment current (active-high); common-
/// anode displays sink it (active-low). The reference hardware selects
/// elements with active-low lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Drive `pin` to the level representing the logical `active` state
    pub fn drive<P: OutputPin>(self, pin: &mut P, active: bool) {
        let high = match self {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        };
        if high {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}
