//! CLINT machine software interrupts (MSIP).

use core::sync::atomic::{fence, Ordering};

use super::HartId;

const MSIP_OFFSET: usize = 0x0000;
const MSIP_STRIDE: usize = 4;

pub struct Clint {
    base: usize,
}

impl Clint {
    /// # Safety
    /// `base` must point at a CLINT (or memory laid out like one) that
    /// stays valid for the lifetime of the value.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    fn msip(&self, hart: HartId) -> *mut u32 {
        (self.base + MSIP_OFFSET + hart.index() * MSIP_STRIDE) as *mut u32
    }

    /// Pend a software interrupt on `hart`.
    pub fn raise(&self, hart: HartId) {
        // Stores made before the wake must be visible to the woken hart
        fence(Ordering::SeqCst);
        unsafe { core::ptr::write_volatile(self.msip(hart), 1) };
    }

    /// Clear `hart`'s software interrupt; returns once the write has landed.
    pub fn clear(&self, hart: HartId) {
        unsafe {
            core::ptr::write_volatile(self.msip(hart), 0);
            let _ = core::ptr::read_volatile(self.msip(hart));
        }
    }

    pub fn is_pending(&self, hart: HartId) -> bool {
        unsafe { core::ptr::read_volatile(self.msip(hart)) & 1 != 0 }
    }
}
