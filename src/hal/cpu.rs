//! CSR-backed hart control for the target.

use riscv::register::{mhartid, mie, mstatus};

use super::{clint::Clint, Error, Hart, HartId};
use crate::config::board::CLINT_BASE;

pub struct MpfsHart {
    id: HartId,
    clint: Clint,
}

impl MpfsHart {
    /// The hart executing this call.
    pub fn current() -> Result<Self, Error> {
        let id = HartId::try_from(mhartid::read())?;
        Ok(Self {
            id,
            clint: unsafe { Clint::new(CLINT_BASE) },
        })
    }

    pub fn id(&self) -> HartId {
        self.id
    }
}

impl Hart for MpfsHart {
    fn hart_id(&self) -> usize {
        mhartid::read()
    }

    fn clear_soft_interrupt(&mut self) {
        self.clint.clear(self.id);
    }

    fn enable_soft_interrupt(&mut self) {
        unsafe { mie::set_msoft() };
    }

    fn raise_soft_interrupt(&mut self, target: HartId) {
        self.clint.raise(target);
    }

    fn enable_irq(&mut self) {
        unsafe { mstatus::set_mie() };
    }
}

/// Mask every interrupt source of this hart.
pub fn disable_interrupts() {
    unsafe {
        mstatus::clear_mie();
        mie::clear_mext();
        mie::clear_mtimer();
        mie::clear_msoft();
    }
}

/// Sleep until `hart` is sent a software interrupt, then consume it.
///
/// Runs before RAM is initialised, so it must not touch statics.
pub fn wait_for_wake(hart: HartId) {
    let clint = unsafe { Clint::new(CLINT_BASE) };
    unsafe { mie::set_msoft() };

    while !clint.is_pending(hart) {
        #[allow(unused_unsafe)]
        unsafe {
            riscv::asm::wfi()
        };
    }
    clint.clear(hart);
}

/// Park this hart for good.
pub fn park() -> ! {
    disable_interrupts();
    loop {
        #[allow(unused_unsafe)]
        unsafe {
            riscv::asm::wfi()
        };
    }
}
