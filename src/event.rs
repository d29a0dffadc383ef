use core::sync::atomic::{AtomicBool, Ordering};

/// Button state shared by the edge interrupt and the main loop.
///
/// The interrupt only ever sets `pressed`; the main loop only ever clears
/// it. It is one byte wide so every access is a single load or store and
/// no lock is needed. An edge that arrives while a press is still pending
/// folds into that press; nothing queues behind it.
pub struct ButtonEvents {
    pressed: AtomicBool,
}

impl ButtonEvents {
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
        }
    }

    pub fn publish(&self) {
        self.pressed.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    pub fn acknowledge(&self) {
        self.pressed.store(false, Ordering::Release);
    }
}

impl Default for ButtonEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Hardware pending indication of one interrupt line.
pub trait PendingLine {
    fn clear_pending(&mut self);
}

/// Body of the edge interrupt.
///
/// The line is cleared before the flag is published; the release store
/// keeps the two in program order.
pub fn capture<L: PendingLine>(line: &mut L, events: &ButtonEvents) {
    line.clear_pending();
    events.publish();
}
