/// The idle counter wraps back to zero when it reaches this value.
pub const IDLE_WRAP: u32 = 0x10_0000;

/// Busy counter that keeps an idle hart occupied between interrupts.
#[derive(Debug, Default)]
pub struct IdleCounter {
    count: u32,
}

impl IdleCounter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    pub fn tick(&mut self) -> u32 {
        self.count += 1;
        if self.count == IDLE_WRAP {
            self.count = 0;
        }
        self.count
    }

    pub fn value(&self) -> u32 {
        self.count
    }
}

/// Spin forever with interrupts left as they are.
pub fn idle_forever() -> ! {
    let mut counter = IdleCounter::new();
    loop {
        core::hint::black_box(counter.tick());
    }
}
