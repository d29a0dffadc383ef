use button_counter::app::SpinWait;

/// core cycles per iteration of a counted busy loop on the cortex-m0
const CYCLES_PER_SPIN: u32 = 4;

/// Debounce wait calibrated in core cycles, independent of any timer.
pub struct CycleDelay {
    cycles: u32,
}

impl CycleDelay {
    pub const fn new(spins: u32) -> Self {
        Self {
            cycles: spins * CYCLES_PER_SPIN,
        }
    }
}

impl SpinWait for CycleDelay {
    fn spin(&mut self) {
        cortex_m::asm::delay(self.cycles);
    }
}
