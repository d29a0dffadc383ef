//! Two-phase boot: establish `.data` and `.bss`, then hand off.
//!
//! Nothing here may read a static. Until [`MemoryImage::initialize`] has
//! finished, `.data` holds whatever ram powered up with and `.bss` is not
//! zero yet.

use core::ops::Range;
use core::ptr;

/// The ram regions a reset handler has to set up.
///
/// Not `Clone`: a value is consumed by [`initialize`](Self::initialize)
/// (or [`boot`]), so one image can only ever be applied once.
pub struct MemoryImage {
    data_load: *const u8,
    data: Range<*mut u8>,
    bss: Range<*mut u8>,
}

impl MemoryImage {
    /// # Safety
    ///
    /// `data_load` must be readable for as many bytes as `data` spans,
    /// `data` and `bss` must be writable, and none of the three may
    /// overlap each other or the stack of the caller.
    pub const unsafe fn new(data_load: *const u8, data: Range<*mut u8>, bss: Range<*mut u8>) -> Self {
        Self {
            data_load,
            data,
            bss,
        }
    }

    /// Copies the initialized data into place, then zero-fills `.bss`.
    ///
    /// Byte-wise volatile accesses: neither loop may become a memcpy or
    /// memset call.
    pub fn initialize(self) {
        let MemoryImage {
            data_load,
            data,
            bss,
        } = self;

        // SAFETY: bounds were promised in `new`
        unsafe {
            let mut src = data_load;
            let mut dst = data.start;

            while dst < data.end {
                ptr::write_volatile(dst, ptr::read_volatile(src));
                dst = dst.add(1);
                src = src.add(1);
            }

            let mut dst = bss.start;

            while dst < bss.end {
                ptr::write_volatile(dst, 0);
                dst = dst.add(1);
            }
        }
    }
}

/// Sets up memory, then runs `main`. Parks the core if `main` returns.
pub fn boot(image: MemoryImage, main: fn()) -> ! {
    image.initialize();

    main();

    loop {
        core::hint::spin_loop();
    }
}
