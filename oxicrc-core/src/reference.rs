//! Bitwise reference implementation.
//!
//! A direct transcription of the Rocksoft model: every input bit is shifted
//! through the register one at a time, MSB-first, with explicit reflection of
//! input bytes and of the final register. No tables, no pre-reflected
//! polynomials, no oriented initial value.
//!
//! It is slow (eight branches per byte) and exists as the oracle the
//! table-driven [`Crc`](crate::Crc) is tested against.

use crate::params::CrcParams;
use crate::table::reflect;

/// Advance a register (normal orientation) over `data`, bit by bit.
pub fn update(params: &CrcParams, mut register: u32, data: &[u8]) -> u32 {
    let width = params.width;
    let mask = width.mask();
    let top = width.top_bit();
    let shift = width.bits() - 8;

    for &byte in data {
        let byte = if params.reflect_in {
            reflect(byte as u32, 8)
        } else {
            byte as u32
        };
        register ^= byte << shift;
        for _ in 0..8 {
            register = if register & top != 0 {
                ((register << 1) ^ params.polynomial) & mask
            } else {
                (register << 1) & mask
            };
        }
    }
    register
}

/// Apply output reflection and the final XOR to a normal-orientation register.
pub fn finalize(params: &CrcParams, register: u32) -> u32 {
    let register = if params.reflect_out {
        reflect(register, params.width.bits())
    } else {
        register
    };
    (register ^ params.xor_out) & params.width.mask()
}

/// Compute a CRC bit by bit.
pub fn checksum(params: &CrcParams, data: &[u8]) -> u32 {
    finalize(params, update(params, params.init, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATALOG, CHECK_INPUT};

    #[test]
    fn test_reference_reproduces_catalog() {
        for entry in CATALOG {
            assert_eq!(
                checksum(&entry.params, CHECK_INPUT),
                entry.check,
                "{}",
                entry.name
            );
        }
    }

    #[test]
    fn test_reference_empty() {
        assert_eq!(checksum(&CrcParams::CRC16_MODBUS, b""), 0xFFFF);
        assert_eq!(checksum(&CrcParams::CRC32_ISO_HDLC, b""), 0);
    }
}
