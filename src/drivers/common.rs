//! Common device driver code.

use core::{marker::PhantomData, ops};

/// Typed view of a register block at a fixed address.
pub struct MmioDerefWrapper<T> {
    base_addr: usize,
    phantom: PhantomData<fn() -> T>,
}

impl<T> MmioDerefWrapper<T> {
    /// # Safety
    /// `base_addr` must point at a live register block of type `T`.
    pub const unsafe fn new(base_addr: usize) -> Self {
        Self {
            base_addr,
            phantom: PhantomData,
        }
    }
}

impl<T> ops::Deref for MmioDerefWrapper<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*(self.base_addr as *const _) }
    }
}
