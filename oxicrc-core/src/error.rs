//! Error types for OxiCRC operations.
//!
//! CRC computation itself is total: any byte sequence can be checksummed.
//! Errors therefore only arise while *configuring* an engine (bad width,
//! zero polynomial, out-of-range values, unknown algorithm names) and from
//! the I/O adapters, which forward errors of the wrapped reader or writer.

use std::io;
use thiserror::Error;

/// The main error type for OxiCRC operations.
#[derive(Debug, Error)]
pub enum CrcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Register width other than 8, 16 or 32 bits.
    #[error("Invalid CRC width: {0} bits (must be 8, 16 or 32)")]
    InvalidWidth(u8),

    /// The generator polynomial is zero.
    #[error("CRC polynomial must be nonzero")]
    ZeroPolynomial,

    /// A parameter does not fit into the register width.
    #[error("{field} {value:#x} does not fit in {width} bits")]
    ValueTooWide {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// Register width in bits.
        width: u8,
    },

    /// No catalog entry with this name or alias.
    #[error("Unknown CRC algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type alias for OxiCRC operations.
pub type Result<T> = std::result::Result<T, CrcError>;

impl CrcError {
    /// Create an invalid width error.
    pub fn invalid_width(bits: u8) -> Self {
        Self::InvalidWidth(bits)
    }

    /// Create a value-too-wide error.
    pub fn value_too_wide(field: &'static str, value: u64, width: u8) -> Self {
        Self::ValueTooWide {
            field,
            value,
            width,
        }
    }

    /// Create an unknown algorithm error.
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }

    /// Returns `true` if this error describes an invalid engine configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CrcError::invalid_width(12);
        assert!(err.to_string().contains("12 bits"));

        let err = CrcError::value_too_wide("polynomial", 0x1_8005, 16);
        assert_eq!(err.to_string(), "polynomial 0x18005 does not fit in 16 bits");

        let err = CrcError::unknown_algorithm("CRC-16/NOPE");
        assert!(err.to_string().contains("CRC-16/NOPE"));

        assert_eq!(
            CrcError::ZeroPolynomial.to_string(),
            "CRC polynomial must be nonzero"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CrcError = io_err.into();
        assert!(matches!(err, CrcError::Io(_)));
        assert!(!err.is_configuration());
        assert!(CrcError::ZeroPolynomial.is_configuration());
    }
}
