use button_counter::config::USART_DIVISOR;
use button_counter::serial::Transmit;
use stm32f0xx_hal::gpio::gpioa::{PA10, PA9};
use stm32f0xx_hal::gpio::{Alternate, AF1};
use stm32f0xx_hal::pac::{RCC, USART1};

pub type TxPin = PA9<Alternate<AF1>>;
pub type RxPin = PA10<Alternate<AF1>>;

/// USART1 with only the transmitter enabled, on PA9.
pub struct Usart1Tx {
    usart: USART1,
    _pins: (TxPin, RxPin),
}

impl Usart1Tx {
    pub fn new(usart: USART1, pins: (TxPin, RxPin)) -> Self {
        let rcc = unsafe { &(*RCC::ptr()) };

        rcc.apb2enr
            .modify(|_, w| w.syscfgen().set_bit().usart1en().set_bit());

        // brr is only writable with the usart disabled
        usart.cr1.modify(|_, w| w.ue().clear_bit());
        usart.brr.write(|w| unsafe { w.bits(USART_DIVISOR) });
        usart.cr1.write(|w| w.ue().set_bit().te().set_bit());

        Self { usart, _pins: pins }
    }
}

impl Transmit for Usart1Tx {
    fn is_ready(&mut self) -> bool {
        self.usart.isr.read().txe().bit_is_set()
    }

    fn write(&mut self, byte: u8) {
        self.usart.tdr.write(|w| unsafe { w.bits(u32::from(byte)) });
    }
}
