//! Offset-tracking reader used by every payload decoder.
use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::wire::error::{Result, WireError};

/// A [`Read`] adapter that counts consumed bytes and turns end-of-stream
/// into [`WireError::TruncatedInput`] naming the field being read.
///
/// The reported offset is where the failing field started, relative to the
/// point where the reader was wrapped.
pub struct WireReader<R> {
    inner: R,
    offset: usize,
}

impl<R: Read> WireReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn read_u8_field(&mut self, field: &'static str) -> Result<u8> {
        let start = self.offset;
        self.read_u8().map_err(|e| eof(e, field, start))
    }

    pub fn read_u16_field(&mut self, field: &'static str) -> Result<u16> {
        let start = self.offset;
        self.read_u16::<LittleEndian>()
            .map_err(|e| eof(e, field, start))
    }

    pub fn read_u32_field(&mut self, field: &'static str) -> Result<u32> {
        let start = self.offset;
        self.read_u32::<LittleEndian>()
            .map_err(|e| eof(e, field, start))
    }

    pub fn read_u64_field(&mut self, field: &'static str) -> Result<u64> {
        let start = self.offset;
        self.read_u64::<LittleEndian>()
            .map_err(|e| eof(e, field, start))
    }

    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let start = self.offset;
        let mut buf = [0u8; N];
        self.read_exact(&mut buf).map_err(|e| eof(e, field, start))?;
        Ok(buf)
    }
}

impl<R: Read> Read for WireReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.offset += n;
        Ok(n)
    }
}

fn eof(e: io::Error, field: &'static str, offset: usize) -> WireError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        WireError::TruncatedInput { field, offset }
    } else {
        WireError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_and_tracks_offset() {
        let bytes = [0x62, 0xea, 0x00, 0x00, 0x01, 0x02];
        let mut r = WireReader::new(&bytes[..]);

        assert_eq!(r.read_u32_field("version").unwrap(), 60002);
        assert_eq!(r.offset(), 4);
        assert_eq!(r.read_u16_field("x").unwrap(), 0x0201);
        assert_eq!(r.offset(), 6);
    }

    #[test]
    fn short_read_reports_field_start() {
        let bytes = [0u8; 6];
        let mut r = WireReader::new(&bytes[..]);
        r.read_u32_field("version").unwrap();

        let err = r.read_u32_field("nonce").unwrap_err();
        assert!(matches!(
            err,
            WireError::TruncatedInput {
                field: "nonce",
                offset: 4
            }
        ));
    }

    #[test]
    fn other_io_errors_pass_through() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
            }
        }

        let err = WireReader::new(Broken).read_u8_field("marker").unwrap_err();
        assert!(matches!(err, WireError::Io(e) if e.kind() == io::ErrorKind::ConnectionReset));
    }
}
