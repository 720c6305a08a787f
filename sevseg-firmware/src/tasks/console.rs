//! Operator console task
//!
//! Reads newline-framed commands from the UART and turns them into
//! configuration writes:
//!
//! - `period <ms>`   - refresh period
//! - `count <n>`     - number of display elements
//! - `value <n>`     - displayed value
//! - `raw <hex>`     - raw segment patterns, two hex digits per element

use defmt::*;
use embassy_rp::uart::{Async, UartRx};
use heapless::{String, Vec};

use sevseg_core::MAX_ELEMENTS;

use crate::channels::{ControlRequest, CONTROL_CHANNEL};

/// Maximum console line length
const LINE_LEN: usize = 32;

/// Console task - parses UART lines into control requests
#[embassy_executor::task]
pub async fn console_task(mut rx: UartRx<'static, Async>) {
    info!("Console task started");

    let mut line: String<LINE_LEN> = String::new();
    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(()) => {
                let byte = buf[0];
                if byte == b'\n' || byte == b'\r' {
                    if !line.is_empty() {
                        match parse_line(&line) {
                            Some(request) => CONTROL_CHANNEL.send(request).await,
                            None => warn!("console: unrecognized command: {}", line.as_str()),
                        }
                        line.clear();
                    }
                } else if line.push(byte as char).is_err() {
                    warn!("console: line too long, discarding");
                    line.clear();
                }
            }
            Err(e) => {
                warn!("console: UART read error: {:?}", e);
            }
        }
    }
}

/// Parse one console line into a control request
fn parse_line(line: &str) -> Option<ControlRequest> {
    let line = line.trim();
    let (command, payload) = match line.split_once(' ') {
        Some((command, payload)) => (command, payload.trim()),
        None => (line, ""),
    };

    match command {
        "period" => Some(ControlRequest::Period(String::try_from(payload).ok()?)),
        "count" => Some(ControlRequest::ElementCount(String::try_from(payload).ok()?)),
        "value" => Some(ControlRequest::Value(String::try_from(payload).ok()?)),
        "raw" => Some(ControlRequest::RawPattern(parse_hex(payload)?)),
        _ => None,
    }
}

/// Decode a hex payload, two digits per byte
fn parse_hex(payload: &str) -> Option<Vec<u8, MAX_ELEMENTS>> {
    let digits = payload.as_bytes();
    if digits.is_empty() || digits.len() % 2 != 0 {
        return None;
    }

    let mut bytes = Vec::new();
    for pair in digits.chunks(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        bytes.push((hi << 4 | lo) as u8).ok()?;
    }
    Some(bytes)
}
