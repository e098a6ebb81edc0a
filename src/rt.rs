//! Glue between `riscv-rt` and the per-hart application code.

use riscv_rt::entry;

use mpfs_bringup::app::{
    e51,
    start::{hart_start, HartStart},
    u54_1,
};
use mpfs_bringup::config::{board, BOOT_MODE, SETTINGS};
use mpfs_bringup::drivers::mss_uart::MssUart;
use mpfs_bringup::hal::{
    cpu::{self, MpfsHart},
    sysreg::Sysreg,
    Hart, HartId,
};

/// Decides which harts run `main`. Called on every hart before RAM is
/// initialised; only the hart returning `true` initialises it.
#[export_name = "_mp_hook"]
pub extern "Rust" fn mp_hook(hartid: usize) -> bool {
    match hart_start(hartid, BOOT_MODE) {
        HartStart::InitRam => true,
        HartStart::WaitForWake => {
            // Sent by the E51 after its banner
            cpu::wait_for_wake(HartId::U54_1);
            false
        }
        HartStart::Park => cpu::park(),
    }
}

#[entry]
fn main() -> ! {
    let mut hart = match MpfsHart::current() {
        Ok(hart) => hart,
        Err(_) => cpu::park(),
    };
    let mut sysreg = unsafe { Sysreg::new(board::SYSREG_BASE) };

    match hart.id() {
        HartId::E51 => {
            let mut uart = unsafe { MssUart::new(board::MMUART0_LO_BASE, SETTINGS.mss_apb_ahb_clk) };
            e51::e51(&mut hart, &mut sysreg, &mut uart, BOOT_MODE)
        }
        HartId::U54_1 => {
            let mut uart = unsafe { MssUart::new(board::MMUART1_LO_BASE, SETTINGS.mss_apb_ahb_clk) };
            u54_1::u54_1(&mut hart, &mut sysreg, &mut uart)
        }
        _ => cpu::park(),
    }
}

/// Machine software interrupt: run the hart's handler, then acknowledge.
#[riscv_rt::core_interrupt(riscv::interrupt::Interrupt::MachineSoft)]
fn machine_soft() {
    let Ok(mut hart) = MpfsHart::current() else {
        cpu::park()
    };

    match hart.id() {
        HartId::E51 => e51::software_h0_irq_handler(&hart),
        HartId::U54_1 => u54_1::software_h1_irq_handler(&hart),
        _ => {}
    }
    hart.clear_soft_interrupt();
}
