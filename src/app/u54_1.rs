//! First application core (hart 1). Started by the E51's software interrupt.

use super::{count_software_interrupt, counter::SoftIrqCounter, idle, CONSOLE_CONFIG};
use crate::drivers::SerialPort;
use crate::hal::{ClockReset, Error, Hart, Peripheral, PeripheralState};

pub const BANNER: &str = "\r\nHello from U54_1. Woken by the E51 software interrupt.\r\n";

/// Software interrupts taken by hart 1 after its wake-up.
pub static COUNT_SW_INTS_H1: SoftIrqCounter = SoftIrqCounter::new();

pub fn bring_up<H, C, S>(hart: &mut H, clocks: &mut C, uart: &mut S) -> Result<(), Error>
where
    H: Hart + ?Sized,
    C: ClockReset + ?Sized,
    S: SerialPort + ?Sized,
{
    let _hart_id = hart.hart_id();

    // The wake-up interrupt itself may still be latched
    hart.clear_soft_interrupt();
    hart.enable_soft_interrupt();

    clocks.config_clk_rst(Peripheral::MmUart1, PeripheralState::On)?;
    uart.init(CONSOLE_CONFIG)?;
    uart.polled_tx_string(BANNER);

    hart.enable_irq();
    Ok(())
}

pub fn u54_1<H, C, S>(hart: &mut H, clocks: &mut C, uart: &mut S) -> !
where
    H: Hart + ?Sized,
    C: ClockReset + ?Sized,
    S: SerialPort + ?Sized,
{
    if let Err(err) = bring_up(hart, clocks, uart) {
        panic!("U54_1 bring-up failed: {err}");
    }
    idle::idle_forever()
}

pub fn software_h1_irq_handler<H: Hart + ?Sized>(hart: &H) {
    count_software_interrupt(hart, &COUNT_SW_INTS_H1);
}
