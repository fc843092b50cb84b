//! CompactSize unsigned integers ("varints").
//!
//! ```text
//! value               wire form
//! < 0xFD              1 byte
//! <= 0xFFFF           0xFD + u16 LE
//! <= 0xFFFF_FFFF      0xFE + u32 LE
//! otherwise           0xFF + u64 LE
//! ```
//!
//! Reference:
//! https://developer.bitcoin.org/reference/transactions.html#compactsize-unsigned-integers
use std::io::{Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::wire::error::{Result, WireError};
use crate::wire::reader::WireReader;

/// Writes `value` using the shortest CompactSize form.
pub fn write_varint<W: Write>(w: &mut W, value: u64) -> Result<()> {
    match value {
        0..=0xFC => w.write_u8(value as u8)?,
        0xFD..=0xFFFF => {
            w.write_u8(0xFD)?;
            w.write_u16::<LittleEndian>(value as u16)?;
        }
        0x1_0000..=0xFFFF_FFFF => {
            w.write_u8(0xFE)?;
            w.write_u32::<LittleEndian>(value as u32)?;
        }
        _ => {
            w.write_u8(0xFF)?;
            w.write_u64::<LittleEndian>(value)?;
        }
    }
    Ok(())
}

/// Reads a CompactSize integer.
///
/// Reads the marker byte and then exactly the width it implies. Non-minimal
/// encodings are accepted.
pub fn read_varint<R: Read>(r: &mut WireReader<R>, field: &'static str) -> Result<u64> {
    let start = r.offset();
    let marker = r.read_u8_field(field)?;
    let value = match marker {
        0xFD => r.read_u16_field(field).map(u64::from),
        0xFE => r.read_u32_field(field).map(u64::from),
        0xFF => r.read_u64_field(field),
        n => Ok(n as u64),
    };

    // A short width read is reported at the marker, where the varint starts.
    value.map_err(|e| match e {
        WireError::TruncatedInput { field, .. } => WireError::TruncatedInput {
            field,
            offset: start,
        },
        other => other,
    })
}

/// Number of bytes `value` occupies on the wire.
pub const fn varint_size(value: u64) -> usize {
    match value {
        0..=0xFC => 1,
        0xFD..=0xFFFF => 3,
        0x1_0000..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}
