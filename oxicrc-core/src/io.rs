//! I/O adapters for streaming CRC computation.
//!
//! - [`Crc`] implements [`std::io::Write`], so `std::io::copy` can feed it.
//! - [`CrcReader`] and [`CrcWriter`] wrap a reader or writer and checksum
//!   exactly the bytes that pass through (short reads and writes included).
//!
//! # Example
//!
//! ```
//! use oxicrc_core::{CrcParams, CrcReader};
//! use std::io::{Cursor, Read};
//!
//! let mut reader = CrcReader::new(Cursor::new(b"123456789".to_vec()), CrcParams::CRC16_ARC)?;
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.checksum().value(), 0xBB3D);
//! # Ok::<(), oxicrc_core::CrcError>(())
//! ```

use crate::engine::{Checksum, Crc};
use crate::error::Result;
use crate::params::CrcParams;
use std::io::{self, Read, Write};

impl Write for Crc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Checksum everything a reader yields until EOF.
pub fn checksum_reader<R: Read>(params: CrcParams, mut reader: R) -> Result<Checksum> {
    let mut crc = Crc::new(params)?;
    io::copy(&mut reader, &mut crc)?;
    Ok(crc.finalize())
}

/// Reader adapter that checksums the bytes it reads.
#[derive(Debug)]
pub struct CrcReader<R> {
    inner: R,
    crc: Crc,
}

impl<R: Read> CrcReader<R> {
    /// Wrap `inner` with a fresh engine for `params`.
    pub fn new(inner: R, params: CrcParams) -> Result<Self> {
        Ok(Self::with_engine(inner, Crc::new(params)?))
    }

    /// Wrap `inner` with an existing engine.
    pub fn with_engine(inner: R, crc: Crc) -> Self {
        Self { inner, crc }
    }

    /// Checksum of the bytes read so far.
    pub fn checksum(&self) -> Checksum {
        self.crc.checksum()
    }

    /// Borrow the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap into the reader and the engine.
    pub fn into_parts(self) -> (R, Crc) {
        (self.inner, self.crc)
    }
}

impl<R: Read> Read for CrcReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.crc.update(&buf[..n]);
        Ok(n)
    }
}

/// Writer adapter that checksums the bytes it writes.
#[derive(Debug)]
pub struct CrcWriter<W> {
    inner: W,
    crc: Crc,
}

impl<W: Write> CrcWriter<W> {
    /// Wrap `inner` with a fresh engine for `params`.
    pub fn new(inner: W, params: CrcParams) -> Result<Self> {
        Ok(Self::with_engine(inner, Crc::new(params)?))
    }

    /// Wrap `inner` with an existing engine.
    pub fn with_engine(inner: W, crc: Crc) -> Self {
        Self { inner, crc }
    }

    /// Checksum of the bytes written so far.
    pub fn checksum(&self) -> Checksum {
        self.crc.checksum()
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap into the writer and the engine.
    pub fn into_parts(self) -> (W, Crc) {
        (self.inner, self.crc)
    }
}

impl<W: Write> Write for CrcWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.crc.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Writer that accepts at most three bytes per call.
    struct Trickle(Vec<u8>);

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(3);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_crc_as_writer() {
        let mut crc = Crc::new(CrcParams::CRC32_ISO_HDLC).unwrap();
        write!(crc, "Hello, World!").unwrap();
        assert_eq!(crc.checksum().value(), 0xEC4AC3D0);
    }

    #[test]
    fn test_checksum_reader() {
        let data = b"123456789".repeat(100);
        let expected = Crc::compute(CrcParams::CRC16_USB, &data).unwrap();
        let actual = checksum_reader(CrcParams::CRC16_USB, Cursor::new(&data)).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_reader_adapter() {
        let mut reader = CrcReader::new(Cursor::new(b"123456789"), CrcParams::CRC8_ROHC).unwrap();
        let mut buf = [0u8; 4];
        let n = reader.read(&mut buf).unwrap();
        assert_eq!(n, 4);
        io::copy(&mut reader, &mut io::sink()).unwrap();
        assert_eq!(reader.checksum().as_u8(), Some(0xD0));
    }

    #[test]
    fn test_writer_counts_short_writes() {
        let mut writer = CrcWriter::new(Trickle(Vec::new()), CrcParams::CRC32_BZIP2).unwrap();
        writer.write_all(b"123456789").unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.checksum().value(), 0xFC891918);
        let (inner, _) = writer.into_parts();
        assert_eq!(inner.0, b"123456789");
    }
}
