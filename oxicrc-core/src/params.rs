//! CRC algorithm parameters.
//!
//! Parameters follow the Rocksoft model used by the CRC RevEng catalogue:
//!
//! | Parameter     | Description                                         |
//! |---------------|-----------------------------------------------------|
//! | `width`       | Register width in bits (8, 16 or 32)                |
//! | `polynomial`  | Generator polynomial, normal form, top bit implicit |
//! | `init`        | Initial register value                              |
//! | `reflect_in`  | Reflect each input byte before processing           |
//! | `reflect_out` | Reflect the register before the final XOR           |
//! | `xor_out`     | Value XORed into the final register                 |
//!
//! All values are given in normal (non-reflected) notation regardless of
//! `reflect_in`; the table builder takes care of the reflected orientation.

use crate::error::{CrcError, Result};
use std::fmt;

/// Register width of a CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// 8-bit register.
    W8,
    /// 16-bit register.
    W16,
    /// 32-bit register.
    W32,
}

impl Width {
    /// Parse a width from its bit count.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            other => Err(CrcError::invalid_width(other)),
        }
    }

    /// Number of bits in the register.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
        }
    }

    /// Number of bytes in a finalized checksum.
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// All-ones mask for the register.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        match self {
            Self::W8 => 0xFF,
            Self::W16 => 0xFFFF,
            Self::W32 => 0xFFFF_FFFF,
        }
    }

    /// Highest bit of the register.
    #[inline(always)]
    pub const fn top_bit(self) -> u32 {
        1 << (self.bits() - 1)
    }

    /// Number of hex digits needed to print a value of this width.
    pub const fn hex_digits(self) -> usize {
        (self.bits() / 4) as usize
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// CRC algorithm parameters.
///
/// Construct directly for compile-time constants (see the catalog constants
/// such as [`CrcParams::CRC16_ARC`]) or through [`CrcParams::new`], which
/// validates the values against the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcParams {
    /// Register width.
    pub width: Width,
    /// Generator polynomial (normal form, without the implicit top bit).
    pub polynomial: u32,
    /// Initial register value.
    pub init: u32,
    /// Reflect input bytes before processing.
    pub reflect_in: bool,
    /// Reflect the register before the final XOR.
    pub reflect_out: bool,
    /// XOR value applied to the final register.
    pub xor_out: u32,
}

impl CrcParams {
    /// Create validated CRC parameters.
    pub fn new(
        width: Width,
        polynomial: u32,
        init: u32,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u32,
    ) -> Result<Self> {
        let params = Self {
            width,
            polynomial,
            init,
            reflect_in,
            reflect_out,
            xor_out,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that the polynomial is nonzero and that every value fits
    /// into the register width.
    pub fn validate(&self) -> Result<()> {
        if self.polynomial == 0 {
            return Err(CrcError::ZeroPolynomial);
        }
        let mask = self.width.mask();
        let bits = self.width.bits() as u8;
        for (field, value) in [
            ("polynomial", self.polynomial),
            ("initial value", self.init),
            ("output XOR", self.xor_out),
        ] {
            if value & !mask != 0 {
                return Err(CrcError::value_too_wide(field, value as u64, bits));
            }
        }
        Ok(())
    }
}

impl fmt::Display for CrcParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width.hex_digits();
        write!(
            f,
            "width={} poly=0x{:0d$x} init=0x{:0d$x} refin={} refout={} xorout=0x{:0d$x}",
            self.width,
            self.polynomial,
            self.init,
            self.reflect_in,
            self.reflect_out,
            self.xor_out,
            d = digits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_bits() {
        assert_eq!(Width::from_bits(8).unwrap(), Width::W8);
        assert_eq!(Width::from_bits(16).unwrap(), Width::W16);
        assert_eq!(Width::from_bits(32).unwrap(), Width::W32);
        assert!(matches!(Width::from_bits(24), Err(CrcError::InvalidWidth(24))));
        assert!(matches!(Width::from_bits(0), Err(CrcError::InvalidWidth(0))));
    }

    #[test]
    fn test_width_geometry() {
        assert_eq!(Width::W8.mask(), 0xFF);
        assert_eq!(Width::W16.top_bit(), 0x8000);
        assert_eq!(Width::W32.top_bit(), 0x8000_0000);
        assert_eq!(Width::W16.bytes(), 2);
        assert_eq!(Width::W32.hex_digits(), 8);
    }

    #[test]
    fn test_params_validation() {
        assert!(CrcParams::new(Width::W16, 0x8005, 0, true, true, 0).is_ok());
        assert!(matches!(
            CrcParams::new(Width::W16, 0, 0, true, true, 0),
            Err(CrcError::ZeroPolynomial)
        ));
        assert!(matches!(
            CrcParams::new(Width::W8, 0x107, 0, false, false, 0),
            Err(CrcError::ValueTooWide {
                field: "polynomial",
                ..
            })
        ));
        assert!(matches!(
            CrcParams::new(Width::W16, 0x1021, 0x1_0000, false, false, 0),
            Err(CrcError::ValueTooWide {
                field: "initial value",
                ..
            })
        ));
        assert!(matches!(
            CrcParams::new(Width::W8, 0x07, 0, false, false, 0x100),
            Err(CrcError::ValueTooWide {
                field: "output XOR",
                ..
            })
        ));
    }

    #[test]
    fn test_params_display() {
        let params = CrcParams::new(Width::W16, 0x1021, 0xFFFF, false, false, 0).unwrap();
        assert_eq!(
            params.to_string(),
            "width=16 poly=0x1021 init=0xffff refin=false refout=false xorout=0x0000"
        );
    }
}
