//! Display refresh task
//!
//! The periodic driver of the multiplex scan: one tick lights one
//! position. The tick body is a bounded sequence of a snapshot copy,
//! table lookups and pin writes; the only suspension is the re-arm sleep.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Delay, Duration, Timer};

use sevseg_core::{OutputDriver, RefreshEngine};
use sevseg_drivers::ShiftRegister;

use crate::channels::DISPLAY;

/// Refresh task - advances the scan by one position per tick
#[embassy_executor::task]
pub async fn refresh_task(mut driver: ShiftRegister<Output<'static>, Delay>) {
    info!("Refresh task started");

    let mut engine = RefreshEngine::new();

    loop {
        // Snapshot under a short critical section; the lock is never held
        // across a line toggle.
        let snapshot = DISPLAY.lock(|state| state.borrow().snapshot());

        let frame = engine.tick(&snapshot);
        driver.commit(&frame);

        // Re-arm measured from the end of this tick, so period changes and
        // scheduling drift never compound. A new period takes effect here,
        // on the next re-arm, not mid-cycle.
        Timer::after(Duration::from_millis(snapshot.period_ms as u64)).await;
    }
}
