use core::sync::atomic::{AtomicU32, Ordering::Relaxed};

/// Software interrupts received by one hart.
///
/// Only that hart's handler writes it; anyone may read it.
pub struct SoftIrqCounter {
    count: AtomicU32,
}

impl SoftIrqCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
        }
    }

    /// Count one event; returns the new total.
    #[inline]
    pub fn record(&self) -> u32 {
        self.count.fetch_add(1, Relaxed).wrapping_add(1)
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count.load(Relaxed)
    }
}

impl Default for SoftIrqCounter {
    fn default() -> Self {
        Self::new()
    }
}
