use crate::config::{LINE_TERMINATOR, REPORT_PREFIX};
use crate::event::ButtonEvents;
use crate::serial::{Reporter, Transmit};

/// Fixed busy-wait that lets a mechanical switch settle.
///
/// Implementations spin; they must not sleep or yield, the edge interrupt
/// has to stay serviceable during the wait.
pub trait SpinWait {
    fn spin(&mut self);
}

/// Main loop state: counts debounced presses and reports each one.
pub struct ButtonCounter<T, D> {
    reporter: Reporter<T>,
    debounce: D,
    presses: u32,
}

impl<T: Transmit, D: SpinWait> ButtonCounter<T, D> {
    pub fn new(tx: T, debounce: D) -> Self {
        Self {
            reporter: Reporter::new(tx),
            debounce,
            presses: 0,
        }
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn reporter(&self) -> &Reporter<T> {
        &self.reporter
    }

    /// One pass of the poll loop, returns whether a press was reported.
    ///
    /// The flag is cleared only after the report has gone out, so edges
    /// during the debounce or the report are absorbed by this press.
    pub fn poll(&mut self, events: &ButtonEvents) -> bool {
        if !events.is_pending() {
            return false;
        }

        self.debounce.spin();

        self.presses = self.presses.wrapping_add(1);

        self.reporter.send_text(REPORT_PREFIX);
        self.reporter.send_u32(self.presses);
        self.reporter.send_text(LINE_TERMINATOR);

        events.acknowledge();

        true
    }

    /// The poll loop. `on_press` sees the count after each report.
    pub fn run<F: FnMut(u32)>(&mut self, events: &ButtonEvents, mut on_press: F) -> ! {
        loop {
            if self.poll(events) {
                on_press(self.presses);
            }
        }
    }
}
