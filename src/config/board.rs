//! PolarFire SoC memory map used by this image.

/// Core-local interruptor: MSIP words, one per hart.
pub const CLINT_BASE: usize = 0x0200_0000;

/// System registers: clock gating and soft reset of the MSS peripherals.
pub const SYSREG_BASE: usize = 0x2000_2000;

/// MMUART0 on the low (non-cached AXI) alias. Console of the E51.
pub const MMUART0_LO_BASE: usize = 0x2000_0000;

/// MMUART1 on the low alias. Console of U54_1.
pub const MMUART1_LO_BASE: usize = 0x2010_0000;

/// E51 plus four U54s.
pub const HART_COUNT: usize = 5;
