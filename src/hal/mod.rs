//! Hart-level and system-level hardware control.
//!
//! The start-up code in [`crate::app`] only talks to the hardware through
//! the [`Hart`] and [`ClockReset`] traits. On the target they are backed by
//! `cpu::MpfsHart` and [`sysreg::Sysreg`].

pub mod clint;
#[cfg(target_arch = "riscv64")]
pub mod cpu;
pub mod sysreg;

use core::fmt;

pub use sysreg::{Peripheral, PeripheralState};

use crate::config::board::HART_COUNT;

/// Harts of the PolarFire SoC MSS, by `mhartid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum HartId {
    E51 = 0,
    U54_1 = 1,
    U54_2 = 2,
    U54_3 = 3,
    U54_4 = 4,
}

impl HartId {
    pub const ALL: [HartId; HART_COUNT] = [
        HartId::E51,
        HartId::U54_1,
        HartId::U54_2,
        HartId::U54_3,
        HartId::U54_4,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for HartId {
    type Error = Error;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        HartId::ALL.get(raw).copied().ok_or(Error::UnknownHart(raw))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `mhartid` outside the E51/U54 range.
    UnknownHart(usize),
    /// Soft reset still asserted after being released.
    ResetNotReleased(Peripheral),
    /// Requested baud rate has no 16-bit divisor at the given clock.
    BaudRateOutOfRange { pclk: u32, baud: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownHart(raw) => write!(f, "unknown hart id {raw}"),
            Error::ResetNotReleased(periph) => write!(f, "{periph:?} is still held in reset"),
            Error::BaudRateOutOfRange { pclk, baud } => {
                write!(f, "no baud divisor for {baud} baud from a {pclk} Hz clock")
            }
        }
    }
}

/// Interrupt control of the hart the code is running on.
pub trait Hart {
    /// Raw `mhartid`.
    fn hart_id(&self) -> usize;

    /// Drop this hart's latched software interrupt.
    fn clear_soft_interrupt(&mut self);

    /// Unmask the machine software interrupt locally (`mie.MSIE`).
    fn enable_soft_interrupt(&mut self);

    /// Pend a software interrupt on `target`.
    fn raise_soft_interrupt(&mut self, target: HartId);

    /// Turn on interrupt delivery for this hart (`mstatus.MIE`).
    fn enable_irq(&mut self);
}

/// Clock gating and soft reset of MSS peripherals.
pub trait ClockReset {
    fn config_clk_rst(&mut self, periph: Peripheral, state: PeripheralState) -> Result<(), Error>;
}
