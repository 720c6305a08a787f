//! Sevseg firmware
//!
//! Firmware binary for an RP2040 board driving a multi-digit seven-segment
//! display: segments through a bit-banged shift register, element selects
//! through direct active-low lines. Operators reconfigure the display at
//! runtime over a UART console.
//!
//! Board wiring:
//! - GP0/GP1: console UART (115200 8N1)
//! - GP2: shift register clock
//! - GP3: shift register data
//! - GP4..GP6: element select lines (leftmost digit first)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{self, Uart};
use embassy_time::Delay;
use heapless::Vec;
use {defmt_rtt as _, panic_probe as _};

use sevseg_core::MAX_ELEMENTS;
use sevseg_drivers::{Polarity, ShiftRegister};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => uart::InterruptHandler<UART0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sevseg firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Shift register segment channel; clock and data idle high
    let clock = Output::new(p.PIN_2, Level::High);
    let data = Output::new(p.PIN_3, Level::High);

    // Element select lines, active-low, idle inactive
    let mut selects: Vec<Output<'static>, MAX_ELEMENTS> = Vec::new();
    let _ = selects.push(Output::new(p.PIN_4, Level::High));
    let _ = selects.push(Output::new(p.PIN_5, Level::High));
    let _ = selects.push(Output::new(p.PIN_6, Level::High));

    let driver = ShiftRegister::new(
        clock,
        data,
        selects,
        Delay,
        Polarity::ActiveLow,
        Polarity::ActiveLow,
    );
    info!("Output driver ready, {} elements wired", driver.wired_elements());

    // Operator console
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = 115200;
    let console = Uart::new(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (_tx, rx) = console.split();

    spawner.spawn(tasks::refresh_task(driver)).unwrap();
    spawner.spawn(tasks::control_task()).unwrap();
    spawner.spawn(tasks::console_task(rx)).unwrap();

    info!("All tasks spawned");
}
