//! Device drivers.

pub mod common;
pub mod mss_uart;

use crate::hal::Error;
pub use mss_uart::{DataBits, LineConfig, Parity, StopBits, UartConfig};

/// Polled serial output.
pub trait SerialPort {
    fn init(&mut self, config: UartConfig) -> Result<(), Error>;

    /// Blocks until every byte has been handed to the transmitter.
    fn polled_tx(&mut self, bytes: &[u8]);

    fn polled_tx_string(&mut self, s: &str) {
        self.polled_tx(s.as_bytes());
    }
}

pub fn put_hex<S: SerialPort + ?Sized>(port: &mut S, mut val: usize) {
    let hex_chars = b"0123456789ABCDEF";
    let mut buf = [0u8; 16];
    let mut i = 0;

    if val == 0 {
        port.polled_tx(b"0");
        return;
    }
    while val > 0 {
        buf[i] = hex_chars[val & 0xF];
        val >>= 4;
        i += 1;
    }
    buf[..i].reverse();
    port.polled_tx(&buf[..i]);
}

pub fn put_dec<S: SerialPort + ?Sized>(port: &mut S, mut val: usize) {
    let mut buf = [0u8; 20];
    let mut i = 0;

    if val == 0 {
        port.polled_tx(b"0");
        return;
    }
    while val > 0 {
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
        i += 1;
    }
    buf[..i].reverse();
    port.polled_tx(&buf[..i]);
}
