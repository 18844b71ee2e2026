//! The streaming CRC engine.
//!
//! [`Crc`] is a single engine for all supported widths. It owns its
//! parameters, a shared lookup table and a running register:
//!
//! ```text
//!            update(..)                 finalize_reset() / reset()
//!   Fresh ─────────────▶ Accumulating ───────────────────────────▶ Fresh
//!     ▲                    │    ▲
//!     └── checksum() ──────┘    └── update(..)
//! ```
//!
//! [`Crc::checksum`] observes the finalized value without touching the
//! register, so a running CRC can be sampled at any point of a stream.
//!
//! # Example
//!
//! ```
//! use oxicrc_core::{Crc, CrcParams};
//!
//! let mut crc = Crc::new(CrcParams::CRC16_MODBUS).unwrap();
//! crc.update(b"12345");
//! crc.update(b"6789");
//! assert_eq!(crc.checksum().value(), 0x4B37);
//! assert_eq!(crc.finalize_reset().as_bytes(), &[0x4B, 0x37]);
//! ```

use crate::catalog;
use crate::error::{CrcError, Result};
use crate::params::{CrcParams, Width};
use crate::table::{CrcTable, reflect};
use std::fmt;
use std::sync::Arc;

/// Parameterized CRC calculator.
///
/// Cloning yields an independent engine (own register) that shares the
/// lookup table.
#[derive(Debug, Clone)]
pub struct Crc {
    params: CrcParams,
    table: Arc<CrcTable>,
    /// `params.init` in the table's orientation.
    init: u32,
    register: u32,
}

impl Crc {
    /// Create an engine from CRC parameters.
    ///
    /// Fails if the polynomial is zero or any value exceeds the width.
    pub fn new(params: CrcParams) -> Result<Self> {
        params.validate()?;
        let table = CrcTable::shared(params.width, params.polynomial, params.reflect_in);
        let init = if params.reflect_in {
            reflect(params.init, params.width.bits())
        } else {
            params.init
        };
        Ok(Self {
            params,
            table,
            init,
            register: init,
        })
    }

    /// Create an engine from raw parameters.
    ///
    /// `width_bits` must be 8, 16 or 32.
    ///
    /// ```
    /// use oxicrc_core::Crc;
    ///
    /// // CRC-16/XMODEM spelled out by hand
    /// let mut crc = Crc::custom(16, 0x1021, 0x0000, false, false, 0x0000).unwrap();
    /// crc.update(b"123456789");
    /// assert_eq!(crc.checksum().as_u16(), Some(0x31C3));
    /// ```
    pub fn custom(
        width_bits: u8,
        polynomial: u32,
        init: u32,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u32,
    ) -> Result<Self> {
        let width = Width::from_bits(width_bits)?;
        Self::new(CrcParams::new(
            width,
            polynomial,
            init,
            reflect_in,
            reflect_out,
            xor_out,
        )?)
    }

    /// Create an engine for a catalog algorithm, by name or alias.
    ///
    /// Names are matched case-insensitively, e.g. `"CRC-16/ARC"`,
    /// `"crc-16/lha"` or `"CRC-32/IEEE"`.
    pub fn from_name(name: &str) -> Result<Self> {
        let entry = catalog::find(name).ok_or_else(|| CrcError::unknown_algorithm(name))?;
        Self::new(entry.params)
    }

    /// Compute a checksum for a slice in one call.
    pub fn compute(params: CrcParams, data: &[u8]) -> Result<Checksum> {
        let mut crc = Self::new(params)?;
        crc.update(data);
        Ok(crc.finalize())
    }

    /// Feed more data into the running register.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.register = self.table.update(self.register, data);
    }

    /// Current checksum of all data fed since the last reset.
    pub fn checksum(&self) -> Checksum {
        let mut value = self.register;
        if self.params.reflect_in != self.params.reflect_out {
            value = reflect(value, self.params.width.bits());
        }
        Checksum::new(self.params.width, value ^ self.params.xor_out)
    }

    /// Return the current checksum and reset the register for the next
    /// message.
    pub fn finalize_reset(&mut self) -> Checksum {
        let checksum = self.checksum();
        self.reset();
        checksum
    }

    /// Finalize and return the checksum, consuming the engine.
    pub fn finalize(self) -> Checksum {
        self.checksum()
    }

    /// Reset the register to the initial value.
    pub fn reset(&mut self) {
        self.register = self.init;
    }

    /// Returns `true` if no data has changed the register since the last
    /// reset.
    ///
    /// Some inputs leave the register unchanged, so this is a property of
    /// the register, not of the byte count.
    pub fn is_fresh(&self) -> bool {
        self.register == self.init
    }

    /// Parameters of this engine.
    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    /// Register width.
    pub fn width(&self) -> Width {
        self.params.width
    }

    /// The lookup table used by this engine.
    pub fn table(&self) -> &Arc<CrcTable> {
        &self.table
    }
}

/// A finalized CRC value.
///
/// The canonical representation is `width / 8` big-endian bytes; the integer
/// accessors expose the same bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum {
    width: Width,
    value: u32,
    bytes: [u8; 4],
}

impl Checksum {
    /// Wrap a raw value, masking it to `width`.
    pub fn new(width: Width, value: u32) -> Self {
        let value = value & width.mask();
        let mut bytes = [0u8; 4];
        let len = width.bytes();
        bytes[..len].copy_from_slice(&value.to_be_bytes()[4 - len..]);
        Self {
            width,
            value,
            bytes,
        }
    }

    /// Width of the checksum.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Checksum as an unsigned integer, zero-extended to 32 bits.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Big-endian bytes, exactly `width / 8` of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.width.bytes()]
    }

    /// Big-endian bytes as an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// The value of an 8-bit checksum.
    pub fn as_u8(&self) -> Option<u8> {
        (self.width == Width::W8).then_some(self.value as u8)
    }

    /// The bit pattern of an 8-bit checksum as a signed integer.
    pub fn as_i8(&self) -> Option<i8> {
        self.as_u8().map(|v| v as i8)
    }

    /// The value of a 16-bit checksum.
    pub fn as_u16(&self) -> Option<u16> {
        (self.width == Width::W16).then_some(self.value as u16)
    }

    /// The bit pattern of a 16-bit checksum as a signed integer.
    ///
    /// `0xFFFF` becomes `-1`, not `65535`.
    pub fn as_i16(&self) -> Option<i16> {
        self.as_u16().map(|v| v as i16)
    }

    /// The value of a 32-bit checksum.
    pub fn as_u32(&self) -> Option<u32> {
        (self.width == Width::W32).then_some(self.value)
    }

    /// The bit pattern of a 32-bit checksum as a signed integer.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_u32().map(|v| v as i32)
    }
}

impl AsRef<[u8]> for Checksum {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0w$X}", self.value, w = self.width.hex_digits())
    }
}

impl fmt::LowerHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:0w$x}", self.value, w = self.width.hex_digits())
    }
}

impl fmt::UpperHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:0w$X}", self.value, w = self.width.hex_digits())
    }
}
