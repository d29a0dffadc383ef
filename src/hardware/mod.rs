pub mod button;
pub mod delay;
pub mod usart;

use crate::hardware::button::Exti0;
use crate::hardware::delay::CycleDelay;
use crate::hardware::usart::Usart1Tx;
use button_counter::app::ButtonCounter;
use button_counter::config::{BAUD_RATE, BUTTON_IRQ, DEBOUNCE_SPINS, IRQ_COUNT};
use button_counter::event::{self, ButtonEvents};
use button_counter::startup::{self, MemoryImage};
use button_counter::vectors::VectorTable;
use core::panic::PanicInfo;
use core::ptr;
use cortex_m::peripheral::NVIC;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::{pac, prelude::*};

/// zero at reset, so it lives in .bss and is valid once startup has run
static BUTTON: ButtonEvents = ButtonEvents::new();

#[link_section = ".vector_table.vectors"]
#[no_mangle]
#[used]
pub static VECTORS: VectorTable<IRQ_COUNT> =
    VectorTable::new(Reset, DefaultHandler).interrupt(BUTTON_IRQ, EXTI0_1);

extern "C" {
    static _sidata: u8;
    static mut _sdata: u8;
    static mut _edata: u8;
    static mut _sbss: u8;
    static mut _ebss: u8;
}

#[allow(non_snake_case)]
#[no_mangle]
pub unsafe extern "C" fn Reset() -> ! {
    let image = MemoryImage::new(
        ptr::addr_of!(_sidata),
        ptr::addr_of_mut!(_sdata)..ptr::addr_of_mut!(_edata),
        ptr::addr_of_mut!(_sbss)..ptr::addr_of_mut!(_ebss),
    );

    startup::boot(image, main)
}

#[allow(non_snake_case)]
extern "C" fn DefaultHandler() {
    halt()
}

#[allow(non_snake_case)]
extern "C" fn EXTI0_1() {
    event::capture(&mut Exti0, &BUTTON);
}

#[inline(never)]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    rprintln!("{}", info);

    halt()
}

fn halt() -> ! {
    loop {
        cortex_m::asm::nop();
    }
}

fn main() {
    rtt_init_print!();

    let Some(mut dp) = pac::Peripherals::take() else {
        halt()
    };

    // hsi at 8 mhz, the clock PCLK assumes
    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    let gpioa = dp.GPIOA.split(&mut rcc);

    let pins = cortex_m::interrupt::free(|cs| {
        (
            gpioa.pa9.into_alternate_af1(cs),
            gpioa.pa10.into_alternate_af1(cs),
        )
    });

    let tx = Usart1Tx::new(dp.USART1, pins);

    button::listen(&dp.SYSCFG, &dp.EXTI);

    rprintln!("usart1 up at {} baud", BAUD_RATE.raw());

    let mut counter = ButtonCounter::new(tx, CycleDelay::new(DEBOUNCE_SPINS));

    // last step of bring-up, everything the handler touches is ready
    unsafe { NVIC::unmask(pac::Interrupt::EXTI0_1) };

    counter.run(&BUTTON, |presses| rprintln!("press {}", presses))
}
