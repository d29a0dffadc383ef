use button_counter::event::PendingLine;
use stm32f0xx_hal::pac::{EXTI, SYSCFG};

/// Routes PA0 to EXTI0 and arms it for rising edges.
///
/// Expects the SYSCFG clock to be on already (usart bring-up does it).
/// The NVIC line is unmasked separately, once the rest is ready.
pub fn listen(syscfg: &SYSCFG, exti: &EXTI) {
    // exti0 source: port a
    syscfg
        .exticr1
        .modify(|r, w| unsafe { w.bits(r.bits() & !0xf) });

    exti.rtsr.modify(|_, w| w.tr0().set_bit());
    exti.imr.modify(|_, w| w.mr0().set_bit());
}

/// Pending bit of EXTI line 0.
pub struct Exti0;

impl PendingLine for Exti0 {
    fn clear_pending(&mut self) {
        let exti = unsafe { &(*EXTI::ptr()) };

        // write one to clear; a plain write leaves the other lines alone
        exti.pr.write(|w| unsafe { w.bits(1 << 0) });
    }
}
