//! Per-hart application code: start-up sequences, software-interrupt
//! handlers and the idle loop.

pub mod counter;
pub mod e51;
pub mod idle;
pub mod start;
pub mod u54_1;

use crate::drivers::{LineConfig, UartConfig};
use crate::hal::Hart;
use counter::SoftIrqCounter;

/// Console settings shared by both harts: 115200 baud, 8N1.
pub const CONSOLE_CONFIG: UartConfig = UartConfig::new(115_200, LineConfig::EIGHT_N_ONE);

/// Body of a software-interrupt handler. The source is acknowledged by the
/// trap dispatcher once this returns.
pub fn count_software_interrupt<H: Hart + ?Sized>(hart: &H, counter: &SoftIrqCounter) -> u32 {
    let _hart_id = hart.hart_id();
    counter.record()
}
