//! # OxiCRC Core
//!
//! Parameterized CRC-8, CRC-16 and CRC-32 computation.
//!
//! This crate provides:
//!
//! - [`params`]: Rocksoft-model parameters and register widths
//! - [`table`]: Lookup tables and the per-byte division step
//! - [`engine`]: The streaming [`Crc`] engine and finalized [`Checksum`]s
//! - [`catalog`]: Every CRC-8/16/32 algorithm of the RevEng catalogue
//! - [`reciprocal`]: Normal ⇄ reversed reciprocal polynomial conversion
//! - [`reference`]: Bitwise reference implementation
//! - [`io`]: `Read`/`Write` adapters
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Catalog                                                 │
//! │     named CrcParams constants, aliases, check values    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Engine                                                  │
//! │     Crc: params + shared table + running register       │
//! ├─────────────────────────────────────────────────────────┤
//! │ Table                                                   │
//! │     256-entry tables, memoized by (width, poly, refin)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_core::{Crc, CrcParams};
//!
//! // Named algorithm
//! let mut crc = Crc::new(CrcParams::CRC16_ARC).unwrap();
//! crc.update(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
//! let checksum = crc.finalize_reset();
//! assert_eq!(checksum.as_bytes(), &[0x17, 0x8C]);
//! assert_eq!(checksum.as_i16(), Some(0x178C));
//!
//! // Lookup by name or alias
//! let mut crc = Crc::from_name("CRC-32/IEEE").unwrap();
//! crc.update(b"Hello, World!");
//! assert_eq!(crc.checksum().value(), 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod io;
pub mod params;
pub mod reciprocal;
pub mod reference;
pub mod table;

// Re-exports for convenience
pub use catalog::{CATALOG, CHECK_INPUT, CatalogEntry};
pub use engine::{Checksum, Crc};
pub use error::{CrcError, Result};
pub use io::{CrcReader, CrcWriter, checksum_reader};
pub use params::{CrcParams, Width};
pub use reciprocal::{from_reversed_reciprocal, to_reversed_reciprocal};
pub use table::CrcTable;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::CatalogEntry;
    pub use crate::engine::{Checksum, Crc};
    pub use crate::error::{CrcError, Result};
    pub use crate::params::{CrcParams, Width};
}
