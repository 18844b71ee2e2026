//! Polynomial notation conversions.
//!
//! A CRC generator polynomial of degree `w` has `w + 1` coefficients, but
//! only `w` of them fit into a `w`-bit register. The literature uses four
//! notations, shown here for CRC-16/CCITT (x^16 + x^12 + x^5 + 1):
//!
//! | Notation            | Omits      | Bit order | CCITT    |
//! |---------------------|------------|-----------|----------|
//! | Normal              | x^w        | MSB-first | `0x1021` |
//! | Reversed            | x^w        | LSB-first | `0x8408` |
//! | Reciprocal          | x^w        | MSB-first of the reciprocal polynomial | `0x0811` |
//! | Reversed reciprocal | x^0        | MSB-first (Koopman) | `0x8810` |
//!
//! The reversed reciprocal (Koopman) form keeps the x^w coefficient and
//! drops the x^0 coefficient instead. Every valid CRC polynomial has x^0 set,
//! so for those polynomials the conversion is a one-bit rotation within the
//! register width: the x^0 bit moves to the top on the way in and back to the
//! bottom on the way out. Implementing it as a rotation also keeps the pair
//! exactly invertible for arbitrary bit patterns.
//!
//! ```
//! use oxicrc_core::Width;
//! use oxicrc_core::reciprocal::{from_reversed_reciprocal, to_reversed_reciprocal};
//!
//! assert_eq!(to_reversed_reciprocal(0x1021u16, Width::W16), 0x8810);
//! assert_eq!(from_reversed_reciprocal(0x8810u16, Width::W16), 0x1021);
//! ```

use crate::params::Width;
use crate::table::reflect;

/// Integer types accepted as polynomial input.
///
/// Values are reinterpreted as their two's-complement bit pattern, so a
/// negative `i64` and the corresponding `u64` convert identically once masked
/// to the register width.
pub trait PolynomialBits: Copy {
    /// Raw bit pattern, zero- or sign-extended to 64 bits.
    fn to_bits(self) -> u64;
}

macro_rules! impl_polynomial_bits {
    ($($ty:ty),*) => {
        $(
            impl PolynomialBits for $ty {
                #[inline(always)]
                fn to_bits(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_polynomial_bits!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[inline(always)]
fn masked(polynomial: impl PolynomialBits, width: Width) -> u32 {
    (polynomial.to_bits() & width.mask() as u64) as u32
}

/// Convert a normal-notation polynomial to reversed reciprocal notation.
///
/// The input is masked to `width` bits first.
pub fn to_reversed_reciprocal(polynomial: impl PolynomialBits, width: Width) -> u32 {
    let p = masked(polynomial, width);
    (p >> 1) | ((p & 1) << (width.bits() - 1))
}

/// Convert a reversed reciprocal polynomial back to normal notation.
///
/// The input is masked to `width` bits first.
pub fn from_reversed_reciprocal(polynomial: impl PolynomialBits, width: Width) -> u32 {
    let p = masked(polynomial, width);
    ((p << 1) | (p >> (width.bits() - 1))) & width.mask()
}

/// 8-bit [`to_reversed_reciprocal`].
pub fn to_reversed_reciprocal_u8(polynomial: u8) -> u8 {
    polynomial.rotate_right(1)
}

/// 8-bit [`from_reversed_reciprocal`].
pub fn from_reversed_reciprocal_u8(polynomial: u8) -> u8 {
    polynomial.rotate_left(1)
}

/// 16-bit [`to_reversed_reciprocal`].
pub fn to_reversed_reciprocal_u16(polynomial: u16) -> u16 {
    polynomial.rotate_right(1)
}

/// 16-bit [`from_reversed_reciprocal`].
pub fn from_reversed_reciprocal_u16(polynomial: u16) -> u16 {
    polynomial.rotate_left(1)
}

/// 32-bit [`to_reversed_reciprocal`].
pub fn to_reversed_reciprocal_u32(polynomial: u32) -> u32 {
    polynomial.rotate_right(1)
}

/// 32-bit [`from_reversed_reciprocal`].
pub fn from_reversed_reciprocal_u32(polynomial: u32) -> u32 {
    polynomial.rotate_left(1)
}

/// Bit-reversed (LSB-first) notation, as used by reflected table builders.
pub fn reversed(polynomial: impl PolynomialBits, width: Width) -> u32 {
    reflect(masked(polynomial, width), width.bits())
}

/// Normal notation of the reciprocal polynomial `x^w * p(1/x)`.
///
/// `polynomial` must have its `x^0` term set, as every generator polynomial
/// does. Bit 0 of the input maps onto the implicit `x^w` term of the result
/// and is dropped, while the result always carries `x^0`. Even inputs are
/// therefore treated as `polynomial | 1`, and the conversion is only an
/// involution over odd polynomials.
pub fn reciprocal(polynomial: impl PolynomialBits, width: Width) -> u32 {
    let p = masked(polynomial, width);
    ((reflect(p, width.bits()) << 1) | 1) & width.mask()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_vectors() {
        for (normal, koopman) in [(0x1021u16, 0x8810u16), (0x8005, 0xC002), (0x1DCF, 0x8EE7)] {
            assert_eq!(to_reversed_reciprocal(normal, Width::W16), koopman as u32);
            assert_eq!(from_reversed_reciprocal(koopman, Width::W16), normal as u32);
            assert_eq!(to_reversed_reciprocal_u16(normal), koopman);
            assert_eq!(from_reversed_reciprocal_u16(koopman), normal);
        }
    }

    #[test]
    fn test_other_widths() {
        // CRC-8/SMBUS 0x07 -> 0x83, CRC-32 0x04C11DB7 -> 0x82608EDB
        assert_eq!(to_reversed_reciprocal(0x07u8, Width::W8), 0x83);
        assert_eq!(to_reversed_reciprocal_u8(0x07), 0x83);
        assert_eq!(from_reversed_reciprocal_u8(0x83), 0x07);
        assert_eq!(to_reversed_reciprocal(0x04C11DB7u32, Width::W32), 0x82608EDB);
        assert_eq!(to_reversed_reciprocal_u32(0x04C11DB7), 0x82608EDB);
        assert_eq!(from_reversed_reciprocal_u32(0x82608EDB), 0x04C11DB7);
    }

    #[test]
    fn test_involution_1000_random() {
        // Same LCG as the benchmark data generator, for reproducibility.
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..1000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let p = (seed >> 32) as u16;
            let there = to_reversed_reciprocal(p, Width::W16);
            assert_eq!(from_reversed_reciprocal(there, Width::W16), p as u32, "p={p:#06x}");
            assert_eq!(to_reversed_reciprocal(from_reversed_reciprocal(p, Width::W16), Width::W16), p as u32);
        }
    }

    #[test]
    fn test_wide_inputs_are_masked() {
        assert_eq!(to_reversed_reciprocal(0xDEAD_1021u64, Width::W16), 0x8810);
        assert_eq!(to_reversed_reciprocal(0x1_1021u32, Width::W16), 0x8810);
        // Sign extension of a negative wide input is masked away.
        let negative = 0xFFFF_FFFF_FFFF_8005u64 as i64;
        assert!(negative < 0);
        assert_eq!(to_reversed_reciprocal(negative, Width::W16), 0xC002);
        assert_eq!(to_reversed_reciprocal(0x8005u16 as i16, Width::W16), 0xC002);
        assert_eq!(from_reversed_reciprocal(0xC002u16 as i16 as i64, Width::W16), 0x8005);
        assert_eq!(to_reversed_reciprocal(-1i32, Width::W8), 0xFF);
    }

    #[test]
    fn test_reversed_and_reciprocal() {
        assert_eq!(reversed(0x1021u16, Width::W16), 0x8408);
        assert_eq!(reciprocal(0x1021u16, Width::W16), 0x0811);
        assert_eq!(reversed(0x04C11DB7u32, Width::W32), 0xEDB88320);
        // The reciprocal of the reciprocal is the original polynomial.
        assert_eq!(reciprocal(reciprocal(0x8005u16, Width::W16), Width::W16), 0x8005);
    }

    #[test]
    fn test_reciprocal_involution_over_odd_polynomials() {
        let mut seed: u32 = 0x2545_F491;
        for _ in 0..1000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            for width in [Width::W8, Width::W16, Width::W32] {
                let p = (seed & width.mask()) | 1;
                let r = reciprocal(p, width);
                assert_eq!(r & 1, 1);
                assert_eq!(reciprocal(r, width), p, "width={} p={:#x}", width, p);
            }
        }
    }

    #[test]
    fn test_reciprocal_treats_even_input_as_odd() {
        assert_eq!(reciprocal(0x8004u16, Width::W16), reciprocal(0x8005u16, Width::W16));
        assert_eq!(reciprocal(reciprocal(0x8004u16, Width::W16), Width::W16), 0x8005);
        assert_eq!(reciprocal(0x06u8, Width::W8), reciprocal(0x07u8, Width::W8));
    }
}
