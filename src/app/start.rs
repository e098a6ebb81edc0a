//! What each hart does before `main`, decided per boot mode.

use crate::config::BootMode;
use crate::hal::HartId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HartStart {
    /// Initialise `.data`/`.bss`, then run `main`.
    InitRam,
    /// Hold in `wfi` until the own MSIP is raised, then run `main` without
    /// touching RAM set-up.
    WaitForWake,
    /// Never run this image.
    Park,
}

impl HartStart {
    /// Value handed back to `riscv-rt` from `_mp_hook`.
    pub const fn initialises_ram(self) -> bool {
        matches!(self, HartStart::InitRam)
    }
}

/// Exactly one hart gets [`HartStart::InitRam`] in either mode.
///
/// Under a bootloader the E51 is not ours and hart 1 has already been
/// released, so waiting for a wake would never return.
pub const fn hart_start(hart: usize, mode: BootMode) -> HartStart {
    match (mode, hart) {
        (BootMode::Standalone, h) if h == HartId::E51 as usize => HartStart::InitRam,
        (BootMode::Standalone, h) if h == HartId::U54_1 as usize => HartStart::WaitForWake,
        (BootMode::LoadedByBootloader, h) if h == HartId::U54_1 as usize => HartStart::InitRam,
        _ => HartStart::Park,
    }
}
