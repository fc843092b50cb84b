//! 32-byte block hashes and their wire/display byte orders.
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::wire::constants::HASH_SIZE;
use crate::wire::error::{HashParseError, Result};
use crate::wire::reader::WireReader;

/// A 32-byte double-SHA256 identifier (block hash, txid).
///
/// Stored in wire order, which is the byte-reverse of the hex form printed
/// by block explorers. [`fmt::Display`] and [`FromStr`] use the display
/// order; the codec reads and writes the stored bytes untouched.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockHash([u8; HASH_SIZE]);

impl BlockHash {
    pub const ZERO: BlockHash = BlockHash([0u8; HASH_SIZE]);

    pub const fn from_wire_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a hash from big-endian (display order) bytes.
    pub fn from_display_bytes(mut bytes: [u8; HASH_SIZE]) -> Self {
        bytes.reverse();
        Self(bytes)
    }

    pub const fn as_wire_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_display_bytes(&self) -> [u8; HASH_SIZE] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }
}

impl From<[u8; HASH_SIZE]> for BlockHash {
    fn from(wire: [u8; HASH_SIZE]) -> Self {
        Self::from_wire_bytes(wire)
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_display_bytes()))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({self})")
    }
}

impl FromStr for BlockHash {
    type Err = HashParseError;

    /// Parses display-order hex. Leading zeros may be omitted, so short and
    /// odd-length strings are left-padded to 64 digits.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() > HASH_SIZE * 2 {
            return Err(HashParseError::TooLong(s.len()));
        }

        let padded = format!("{s:0>64}");
        let mut display = [0u8; HASH_SIZE];
        hex::decode_to_slice(padded, &mut display)?;

        Ok(Self::from_display_bytes(display))
    }
}

/// Writes the 32 wire-order bytes of `hash`.
pub fn write_hash<W: Write>(w: &mut W, hash: &BlockHash) -> Result<()> {
    w.write_all(hash.as_wire_bytes())?;
    Ok(())
}

/// Reads exactly 32 bytes as a hash.
pub fn read_hash<R: Read>(r: &mut WireReader<R>, field: &'static str) -> Result<BlockHash> {
    Ok(BlockHash(r.read_array::<HASH_SIZE>(field)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::constants::GENESIS_BLOCK_HASH_MAINNET;
    use crate::wire::error::WireError;

    const GENESIS_HEX: &str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

    #[test]
    fn display_is_byte_reversed_wire_order() {
        let h = BlockHash::from_wire_bytes(GENESIS_BLOCK_HASH_MAINNET);
        assert_eq!(h.to_string(), GENESIS_HEX);
    }

    #[test]
    fn parse_matches_wire_constant() {
        let h: BlockHash = GENESIS_HEX.parse().unwrap();
        assert_eq!(h.as_wire_bytes(), &GENESIS_BLOCK_HASH_MAINNET);
    }

    #[test]
    fn wire_display_wire_is_identity() {
        let mut wire = [0u8; 32];
        for (i, b) in wire.iter_mut().enumerate() {
            *b = i as u8;
        }
        let h = BlockHash::from_wire_bytes(wire);
        assert_eq!(BlockHash::from_display_bytes(h.to_display_bytes()), h);
        assert_eq!(h.to_string().parse::<BlockHash>().unwrap(), h);
    }

    #[test]
    fn short_and_odd_length_strings_are_zero_padded() {
        let short: BlockHash = "3ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
            .parse()
            .unwrap();
        let full: BlockHash = "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
            .parse()
            .unwrap();
        assert_eq!(short, full);
        assert_eq!(short.as_wire_bytes()[0], 0x06);
        assert_eq!(short.as_wire_bytes()[26], 0x03);
        assert_eq!(short.as_wire_bytes()[27..], [0u8; 5]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "0".repeat(65).parse::<BlockHash>(),
            Err(HashParseError::TooLong(65))
        );
        assert!(matches!(
            "zz".parse::<BlockHash>(),
            Err(HashParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn empty_string_is_zero_hash() {
        assert!("".parse::<BlockHash>().unwrap().is_zero());
    }

    #[test]
    fn read_requires_32_bytes() {
        let bytes = [0xAB; 31];
        let err = read_hash(&mut WireReader::new(&bytes[..]), "hash_stop").unwrap_err();
        assert!(matches!(
            err,
            WireError::TruncatedInput {
                field: "hash_stop",
                offset: 0
            }
        ));
    }

    #[test]
    fn write_emits_wire_order() {
        let h: BlockHash = GENESIS_HEX.parse().unwrap();
        let mut out = vec![];
        write_hash(&mut out, &h).unwrap();
        assert_eq!(out, GENESIS_BLOCK_HASH_MAINNET);
    }
}
