//! Monitor core (hart 0).

use super::{count_software_interrupt, counter::SoftIrqCounter, idle, CONSOLE_CONFIG};
use crate::config::BootMode;
use crate::drivers::SerialPort;
use crate::hal::{ClockReset, Error, Hart, HartId, Peripheral, PeripheralState};

pub const BANNER: &str =
    "\r\nThis code is running from E51. Please observe UART-1 for application messages\r\n";

/// Software interrupts taken by hart 0.
pub static COUNT_SW_INTS_H0: SoftIrqCounter = SoftIrqCounter::new();

/// Everything the E51 does before it goes idle. The order is fixed by the
/// hardware: the latched MSIP must be gone before `mstatus.MIE` is set, and
/// MMUART0 must be clocked and out of reset before it is touched.
pub fn bring_up<H, C, S>(hart: &mut H, clocks: &mut C, uart: &mut S, mode: BootMode) -> Result<(), Error>
where
    H: Hart + ?Sized,
    C: ClockReset + ?Sized,
    S: SerialPort + ?Sized,
{
    let _hart_id = hart.hart_id();

    hart.clear_soft_interrupt();
    hart.enable_soft_interrupt();

    clocks.config_clk_rst(Peripheral::MmUart0, PeripheralState::On)?;
    uart.init(CONSOLE_CONFIG)?;
    uart.polled_tx_string(BANNER);

    if mode == BootMode::Standalone {
        hart.raise_soft_interrupt(HartId::U54_1);
    }

    hart.enable_irq();
    Ok(())
}

/// E51 entry point. Never returns.
pub fn e51<H, C, S>(hart: &mut H, clocks: &mut C, uart: &mut S, mode: BootMode) -> !
where
    H: Hart + ?Sized,
    C: ClockReset + ?Sized,
    S: SerialPort + ?Sized,
{
    if let Err(err) = bring_up(hart, clocks, uart, mode) {
        panic!("E51 bring-up failed: {err}");
    }
    idle::idle_forever()
}

/// Software interrupt on hart 0, raised by a peer hart.
pub fn software_h0_irq_handler<H: Hart + ?Sized>(hart: &H) {
    count_software_interrupt(hart, &COUNT_SW_INTS_H0);
}
