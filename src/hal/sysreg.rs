//! SYSREG peripheral clock gating and soft reset.

use tock_registers::{
    interfaces::{Readable, Writeable},
    register_structs,
    registers::ReadWrite,
};

use super::{ClockReset, Error};
use crate::drivers::common::MmioDerefWrapper;

register_structs! {
    RegisterBlock {
        (0x000 => _reserved0),
        (0x084 => subblk_clock_cr: ReadWrite<u32>),
        (0x088 => soft_reset_cr: ReadWrite<u32>),
        (0x08C => @END),
    }
}

type Registers = MmioDerefWrapper<RegisterBlock>;

/// MSS peripherals, numbered by their bit in `SUBBLK_CLOCK_CR` and
/// `SOFT_RESET_CR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Peripheral {
    Envm = 0,
    Mac0 = 1,
    Mac1 = 2,
    Mmc = 3,
    Timer = 4,
    MmUart0 = 5,
    MmUart1 = 6,
    MmUart2 = 7,
    MmUart3 = 8,
    MmUart4 = 9,
    Spi0 = 10,
    Spi1 = 11,
    I2c0 = 12,
    I2c1 = 13,
    Can0 = 14,
    Can1 = 15,
    Usb = 16,
    Rtc = 18,
    Qspi = 19,
    Gpio0 = 20,
    Gpio1 = 21,
    Gpio2 = 22,
    Ddrc = 23,
    Fic0 = 24,
    Fic1 = 25,
    Fic2 = 26,
    Fic3 = 27,
    Athena = 28,
    Cfm = 29,
}

impl Peripheral {
    const fn mask(self) -> u32 {
        1 << self as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeripheralState {
    Off,
    On,
}

pub struct Sysreg {
    registers: Registers,
}

impl Sysreg {
    /// # Safety
    /// `base_addr` must point at the SYSREG block.
    pub const unsafe fn new(base_addr: usize) -> Self {
        Self {
            registers: Registers::new(base_addr),
        }
    }

    pub fn is_clocked(&self, periph: Peripheral) -> bool {
        self.registers.subblk_clock_cr.get() & periph.mask() != 0
    }

    pub fn in_reset(&self, periph: Peripheral) -> bool {
        self.registers.soft_reset_cr.get() & periph.mask() != 0
    }
}

impl ClockReset for Sysreg {
    fn config_clk_rst(&mut self, periph: Peripheral, state: PeripheralState) -> Result<(), Error> {
        let mask = periph.mask();
        let clocks = &self.registers.subblk_clock_cr;
        let resets = &self.registers.soft_reset_cr;

        match state {
            PeripheralState::On => {
                // Clock first: reset is synchronous to the peripheral clock
                clocks.set(clocks.get() | mask);
                resets.set(resets.get() & !mask);
                if self.in_reset(periph) {
                    return Err(Error::ResetNotReleased(periph));
                }
            }
            PeripheralState::Off => {
                resets.set(resets.get() | mask);
                clocks.set(clocks.get() & !mask);
            }
        }
        Ok(())
    }
}
