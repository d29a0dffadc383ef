//! Decimal formatting for `u32` without a division instruction.
//!
//! Cortex-M0 has no hardware divider, so the quotient by ten comes from
//! multiplying by `0xCCCC_CCCD` (`ceil(2^35 / 10)`) and keeping the top
//! bits of the 64-bit product. The error term of that constant is small
//! enough that the result is exact for every 32-bit input.

use heapless::Vec;

/// length of the longest decimal u32 (4294967295)
pub const MAX_DIGITS: usize = 10;

pub type Digits = Vec<u8, MAX_DIGITS>;

#[inline]
pub const fn div10(n: u32) -> u32 {
    ((n as u64 * 0xCCCC_CCCD) >> 35) as u32
}

#[inline]
pub const fn mod10(n: u32) -> u32 {
    n - div10(n) * 10
}

/// Ascii digits of `n`, most significant first, without leading zeros.
pub fn encode(mut n: u32) -> Digits {
    let mut digits = Digits::new();

    if n == 0 {
        digits.push(b'0').ok();
        return digits;
    }

    // least significant digit comes out first
    while n != 0 {
        digits.push(b'0' + mod10(n) as u8).ok();
        n = div10(n);
    }

    digits.reverse();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(n: u32) -> String {
        String::from_utf8(encode(n).to_vec()).unwrap()
    }

    #[test]
    fn known_values() {
        assert_eq!(text(0), "0");
        assert_eq!(text(7), "7");
        assert_eq!(text(9), "9");
        assert_eq!(text(10), "10");
        assert_eq!(text(4_294_967_295), "4294967295");
    }

    #[test]
    fn digit_count_changes_at_powers_of_ten() {
        let mut power = 1u32;

        for digits in 1..MAX_DIGITS {
            power *= 10;

            assert_eq!(encode(power - 1).len(), digits);
            assert_eq!(encode(power).len(), digits + 1);
            assert_eq!(text(power), format!("1{}", "0".repeat(digits)));
        }
    }

    #[test]
    fn reciprocal_holds_around_multiples_of_ten() {
        for q in [0u32, 1, 6_553, 65_536, 429_496_728, 429_496_729] {
            for r in 0..10 {
                let Some(n) = q.checked_mul(10).and_then(|n| n.checked_add(r)) else {
                    continue;
                };

                assert_eq!(div10(n), q, "div10({})", n);
                assert_eq!(mod10(n), r, "mod10({})", n);
            }
        }
    }

    proptest! {
        #[test]
        fn encode_parses_back(n in any::<u32>()) {
            let s = text(n);

            prop_assert_eq!(s.parse::<u32>().unwrap(), n);
            prop_assert!(n == 0 || !s.starts_with('0'));
            prop_assert!(s.bytes().all(|b| b.is_ascii_digit()));
        }

        #[test]
        fn div10_and_mod10_recompose(n in any::<u32>()) {
            prop_assert!(mod10(n) < 10);
            prop_assert_eq!(div10(n) as u64 * 10 + mod10(n) as u64, n as u64);
            prop_assert_eq!(div10(n), n / 10);
        }
    }
}
