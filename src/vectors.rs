//! Cortex-M vector table, built explicitly instead of through weak symbols.
//!
//! [`VectorTable::new`] binds one fallback handler to every slot, reserved
//! ones included, and the builder methods then override individual
//! sources. The initial stack pointer is word 0 of the real table; the
//! linker script emits it directly in front of this struct.

/// handler for an exception or device interrupt
pub type Vector = unsafe extern "C" fn();

pub type ResetVector = unsafe extern "C" fn() -> !;

/// system exception slots between the reset vector and device interrupts
pub const EXCEPTION_SLOTS: usize = 14;

/// System exceptions present on ARMv6-M.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exception {
    NonMaskableInt,
    HardFault,
    SVCall,
    PendSV,
    SysTick,
}

impl Exception {
    /// exception number minus two
    const fn slot(self) -> usize {
        match self {
            Exception::NonMaskableInt => 0,
            Exception::HardFault => 1,
            Exception::SVCall => 9,
            Exception::PendSV => 12,
            Exception::SysTick => 13,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct VectorTable<const IRQS: usize> {
    // only the core reads it
    #[allow(dead_code)]
    reset: ResetVector,
    exceptions: [Vector; EXCEPTION_SLOTS],
    interrupts: [Vector; IRQS],
}

impl<const IRQS: usize> VectorTable<IRQS> {
    pub const fn new(reset: ResetVector, fallback: Vector) -> Self {
        Self {
            reset,
            exceptions: [fallback; EXCEPTION_SLOTS],
            interrupts: [fallback; IRQS],
        }
    }

    pub const fn exception(mut self, exception: Exception, handler: Vector) -> Self {
        self.exceptions[exception.slot()] = handler;
        self
    }

    /// Binds device interrupt `irq`; out of range fails const evaluation.
    pub const fn interrupt(mut self, irq: usize, handler: Vector) -> Self {
        self.interrupts[irq] = handler;
        self
    }

    pub fn exception_handler(&self, exception: Exception) -> Vector {
        self.exceptions[exception.slot()]
    }

    pub fn interrupt_handler(&self, irq: usize) -> Option<Vector> {
        self.interrupts.get(irq).copied()
    }
}
