use crate::decimal;

/// Transmit half of a serial peripheral: one status bit and a data register.
pub trait Transmit {
    /// the data register can take another byte
    fn is_ready(&mut self) -> bool;

    /// hand one byte to the data register
    fn write(&mut self, byte: u8);
}

/// Byte-at-a-time reporting over a [`Transmit`].
///
/// Nothing is buffered. Every byte spins on the ready bit first, so a
/// transmitter that never becomes ready stalls the caller for good.
/// Interrupts keep running while it spins.
pub struct Reporter<T> {
    tx: T,
}

impl<T: Transmit> Reporter<T> {
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    pub fn send_byte(&mut self, byte: u8) {
        while !self.tx.is_ready() {
            core::hint::spin_loop();
        }

        self.tx.write(byte);
    }

    pub fn send_text(&mut self, text: &[u8]) {
        for &byte in text {
            self.send_byte(byte);
        }
    }

    pub fn send_u32(&mut self, n: u32) {
        self.send_text(&decimal::encode(n));
    }

    pub fn transmitter(&self) -> &T {
        &self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Busy for `busy_polls` polls before every byte.
    struct SlowTx {
        busy_polls: u32,
        remaining: u32,
        ready_seen: bool,
        polls: u32,
        sent: Vec<u8>,
    }

    impl SlowTx {
        fn new(busy_polls: u32) -> Self {
            Self {
                busy_polls,
                remaining: busy_polls,
                ready_seen: false,
                polls: 0,
                sent: Vec::new(),
            }
        }
    }

    impl Transmit for SlowTx {
        fn is_ready(&mut self) -> bool {
            self.polls += 1;

            if self.remaining == 0 {
                self.ready_seen = true;
            } else {
                self.remaining -= 1;
            }

            self.ready_seen
        }

        fn write(&mut self, byte: u8) {
            assert!(self.ready_seen, "wrote {:?} while busy", byte as char);

            self.sent.push(byte);
            self.ready_seen = false;
            self.remaining = self.busy_polls;
        }
    }

    #[test]
    fn text_goes_out_in_order() {
        let mut reporter = Reporter::new(SlowTx::new(0));

        reporter.send_text(b"abc");

        assert_eq!(reporter.transmitter().sent, b"abc");
    }

    #[test]
    fn waits_for_ready_before_each_byte() {
        let mut reporter = Reporter::new(SlowTx::new(3));

        reporter.send_text(b"hi");

        assert_eq!(reporter.transmitter().sent, b"hi");
        assert_eq!(reporter.transmitter().polls, 8);
    }

    #[test]
    fn empty_text_sends_nothing() {
        let mut reporter = Reporter::new(SlowTx::new(1));

        reporter.send_text(b"");

        assert!(reporter.transmitter().sent.is_empty());
        assert_eq!(reporter.transmitter().polls, 0);
    }

    #[test]
    fn numbers_go_out_as_decimal() {
        let mut reporter = Reporter::new(SlowTx::new(1));

        reporter.send_u32(0);
        reporter.send_byte(b' ');
        reporter.send_u32(4_294_967_295);

        assert_eq!(reporter.transmitter().sent, b"0 4294967295");
    }
}
