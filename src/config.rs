use fugit::HertzU32;

/// clock feeding usart1 (hsi, the reset default)
pub const PCLK: HertzU32 = HertzU32::from_raw(8_000_000);

/// serial line rate
pub const BAUD_RATE: HertzU32 = HertzU32::from_raw(115_200);

/// value written once to usart1 brr
pub const USART_DIVISOR: u32 = usart_divisor(PCLK, BAUD_RATE);

/// how long to let the switch settle after an edge (in spin loop iterations)
pub const DEBOUNCE_SPINS: u32 = 250_000;

pub const REPORT_PREFIX: &[u8] = b"Button is pressed : ";
pub const LINE_TERMINATOR: &[u8] = b"\n";

/// device interrupt the button edge arrives on (exti0_1)
pub const BUTTON_IRQ: usize = 5;

/// device interrupt vectors on the stm32f0
pub const IRQ_COUNT: usize = 32;

/// Oversampling by 16 divisor for a usart clocked at `pclk`.
pub const fn usart_divisor(pclk: HertzU32, baud: HertzU32) -> u32 {
    pclk.raw() / baud.raw()
}
