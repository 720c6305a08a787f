//! Control task
//!
//! Applies operator writes to the shared display configuration. Invalid
//! input is logged and rejected; it never disturbs the running scan or the
//! previously accepted configuration.

use defmt::*;

use crate::channels::{ControlRequest, CONTROL_CHANNEL, DISPLAY};

/// Control task - drains the write channel into the shared state
#[embassy_executor::task]
pub async fn control_task() {
    info!("Control task started");

    loop {
        let request = CONTROL_CHANNEL.receive().await;

        let result = DISPLAY.lock(|state| {
            let mut state = state.borrow_mut();
            match &request {
                ControlRequest::Period(text) => state.set_period_str(text),
                ControlRequest::ElementCount(text) => state.set_element_count_str(text),
                ControlRequest::Value(text) => state.set_value_str(text),
                ControlRequest::RawPattern(bytes) => state.set_raw_pattern(bytes),
            }
        });

        match result {
            Ok(()) => debug!("control: applied {:?}", request),
            Err(e) => warn!("control: rejected {:?}: {:?}", request, e),
        }
    }
}
