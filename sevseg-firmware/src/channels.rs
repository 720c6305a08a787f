//! Shared state and inter-task communication
//!
//! The display configuration is the one piece of state both the refresh
//! task and the control surface touch. It sits behind a blocking mutex
//! locked only long enough to copy a snapshot or apply one write, so the
//! refresh tick is never blocked for an unbounded time and never reads a
//! half-updated configuration.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use heapless::{String, Vec};

use sevseg_core::{DisplayState, MAX_ELEMENTS};

/// Maximum text payload length for a configuration write
pub const MAX_PAYLOAD_LEN: usize = 16;

/// Channel capacity for pending configuration writes
const CONTROL_CHANNEL_SIZE: usize = 8;

/// One operator write, payload still in the wire form it arrived in
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlRequest {
    /// Refresh period in milliseconds
    Period(String<MAX_PAYLOAD_LEN>),
    /// Number of display elements
    ElementCount(String<MAX_PAYLOAD_LEN>),
    /// Displayed value
    Value(String<MAX_PAYLOAD_LEN>),
    /// Raw segment patterns, one byte per element
    RawPattern(Vec<u8, MAX_ELEMENTS>),
}

/// Configuration writes from the console to the control task
pub static CONTROL_CHANNEL: Channel<CriticalSectionRawMutex, ControlRequest, CONTROL_CHANNEL_SIZE> =
    Channel::new();

/// Shared display configuration (written by control, read by refresh)
pub static DISPLAY: Mutex<CriticalSectionRawMutex, RefCell<DisplayState>> =
    Mutex::new(RefCell::new(DisplayState::new()));
