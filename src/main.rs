//! STM32F051 image: counts button presses on PA0 and reports each one on
//! USART1 (PA9, 115200 8N1).
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod hardware;

// host builds (`cargo test`) only need this target to link
#[cfg(not(target_os = "none"))]
fn main() {}
