//! Shared body of `getheaders` and `getblocks`.
//!
//! ```text
//! uint32   protocol_version
//! varint   hash_count
//! hash[]   block_locator_hashes
//! hash     hash_stop
//! ```
use std::io::{Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::wire::bounded::BlockLocator;
use crate::wire::constants::{HASH_SIZE, MAX_BLOCK_LOCATORS_PER_MSG, MAX_VAR_INT_PAYLOAD};
use crate::wire::error::Result;
use crate::wire::hash::{BlockHash, read_hash, write_hash};
use crate::wire::reader::WireReader;
use crate::wire::varint::{read_varint, write_varint};
use crate::wire::version::{FieldGate, ProtocolVersion};

pub(super) const FIELDS: &[FieldGate] = &[
    FieldGate::always("protocol_version"),
    FieldGate::always("block_locator_hashes"),
    FieldGate::always("hash_stop"),
];

pub(super) fn encode<W: Write>(
    w: &mut W,
    protocol_version: ProtocolVersion,
    locator: &BlockLocator,
    hash_stop: &BlockHash,
) -> Result<()> {
    let count = locator.check_count(locator.len() as u64)?;

    w.write_u32::<LittleEndian>(protocol_version)?;
    write_varint(w, count as u64)?;

    for hash in locator {
        write_hash(w, hash)?;
    }

    write_hash(w, hash_stop)
}

/// Decodes into the given fields and returns the protocol version read from
/// the wire. The locator is cleared first and only grows by hashes that were
/// read in full.
pub(super) fn decode<R: Read>(
    r: &mut R,
    locator: &mut BlockLocator,
    hash_stop: &mut BlockHash,
) -> Result<ProtocolVersion> {
    let mut r = WireReader::new(r);

    let protocol_version = r.read_u32_field("protocol_version")?;

    let count = read_varint(&mut r, "hash_count")?;
    let count = locator.check_count(count)?;

    locator.clear();
    locator.reserve(count);
    for _ in 0..count {
        let hash = read_hash(&mut r, "block_locator_hashes")?;
        locator.push(hash)?;
    }

    *hash_stop = read_hash(&mut r, "hash_stop")?;

    Ok(protocol_version)
}

/// Version (4) + widest hash_count + full locator + stop hash.
pub(super) fn max_payload_len() -> u32 {
    (4 + MAX_VAR_INT_PAYLOAD + MAX_BLOCK_LOCATORS_PER_MSG * HASH_SIZE + HASH_SIZE) as u32
}
