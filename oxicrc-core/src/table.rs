//! Lookup tables and the per-byte division step.
//!
//! A [`CrcTable`] holds the remainder of every possible byte value divided by
//! the generator polynomial, which turns the eight bit-level shifts of a CRC
//! update into a single table lookup per input byte.
//!
//! Two orientations are supported:
//!
//! - **Normal** (`reflect_in = false`): MSB-first. The register's top byte is
//!   combined with the input byte and the register shifts left.
//! - **Reflected** (`reflect_in = true`): LSB-first. The table is built from
//!   the bit-reversed polynomial, the register's low byte is combined with the
//!   input byte and the register shifts right. The register then holds the
//!   bit-reversed CRC, which saves reflecting every input byte.
//!
//! Tables only depend on `(width, polynomial, reflect_in)`. [`CrcTable::shared`]
//! memoizes them process-wide so that live engines sharing a polynomial
//! (e.g. the CRC-16 variants over 0x1021) share one table. The cache holds
//! weak references only: a table is freed once the last engine using it is
//! dropped, and rebuilt on the next request.

use crate::params::Width;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, Weak};

/// Reverse the low `bits` bits of `value`.
#[inline]
pub const fn reflect(value: u32, bits: u32) -> u32 {
    value.reverse_bits() >> (32 - bits)
}

/// 256-entry CRC lookup table.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable {
    width: Width,
    polynomial: u32,
    reflected: bool,
    entries: [u32; 256],
}

type TableKey = (Width, u32, bool);

static TABLE_CACHE: OnceLock<Mutex<HashMap<TableKey, Weak<CrcTable>>>> = OnceLock::new();

impl CrcTable {
    /// Build a table for the given polynomial (normal notation).
    pub const fn build(width: Width, polynomial: u32, reflected: bool) -> Self {
        let mask = width.mask();
        let mut entries = [0u32; 256];
        let mut i = 0usize;

        if reflected {
            let poly = reflect(polynomial & mask, width.bits());
            while i < 256 {
                let mut crc = i as u32;
                let mut j = 0;
                while j < 8 {
                    if crc & 1 != 0 {
                        crc = (crc >> 1) ^ poly;
                    } else {
                        crc >>= 1;
                    }
                    j += 1;
                }
                entries[i] = crc;
                i += 1;
            }
        } else {
            let top = width.top_bit();
            let shift = width.bits() - 8;
            while i < 256 {
                let mut crc = (i as u32) << shift;
                let mut j = 0;
                while j < 8 {
                    if crc & top != 0 {
                        crc = ((crc << 1) ^ polynomial) & mask;
                    } else {
                        crc = (crc << 1) & mask;
                    }
                    j += 1;
                }
                entries[i] = crc;
                i += 1;
            }
        }

        Self {
            width,
            polynomial,
            reflected,
            entries,
        }
    }

    /// Fetch a table from the process-wide cache, building it if no live
    /// engine currently holds one for the same key.
    pub fn shared(width: Width, polynomial: u32, reflected: bool) -> Arc<Self> {
        let key = (width, polynomial, reflected);
        let cache = TABLE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        // The map only ever holds handles to finished immutable tables, so a
        // poisoned lock still guards consistent data.
        let mut tables = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(table) = tables.get(&key).and_then(Weak::upgrade) {
            log::trace!(
                "CRC table cache hit: width={} poly={:#x} reflected={}",
                width,
                polynomial,
                reflected
            );
            return table;
        }

        log::debug!(
            "building CRC table: width={} poly={:#x} reflected={}",
            width,
            polynomial,
            reflected
        );
        let table = Arc::new(Self::build(width, polynomial, reflected));
        tables.retain(|_, cached| cached.strong_count() > 0);
        tables.insert(key, Arc::downgrade(&table));
        table
    }

    /// Register width this table was built for.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Polynomial this table was built from (normal notation).
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Whether the table is LSB-first (reflected input).
    pub fn is_reflected(&self) -> bool {
        self.reflected
    }

    /// All 256 entries.
    pub fn entries(&self) -> &[u32; 256] {
        &self.entries
    }

    /// Entry for one byte value.
    #[inline(always)]
    pub fn get(&self, index: u8) -> u32 {
        self.entries[index as usize]
    }

    /// Advance `register` by one input byte.
    #[inline(always)]
    pub fn step(&self, register: u32, byte: u8) -> u32 {
        if self.reflected {
            let index = ((register ^ byte as u32) & 0xFF) as u8;
            self.get(index) ^ (register >> 8)
        } else {
            let bits = self.width.bits();
            let index = (((register >> (bits - 8)) ^ byte as u32) & 0xFF) as u8;
            // For 8-bit registers the shifted remainder is masked away entirely.
            (self.get(index) ^ (register << 8)) & self.width.mask()
        }
    }

    /// Advance `register` over a whole slice.
    #[inline]
    pub fn update(&self, register: u32, data: &[u8]) -> u32 {
        data.iter().fold(register, |crc, &byte| self.step(crc, byte))
    }
}

impl fmt::Debug for CrcTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcTable")
            .field("width", &self.width)
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .field("reflected", &self.reflected)
            .finish_non_exhaustive()
    }
}
