use std::io::{Read, Write};

use crate::wire::bounded::BlockLocator;
use crate::wire::command::Command;
use crate::wire::error::Result;
use crate::wire::hash::BlockHash;
use crate::wire::message::{Message, locator};
use crate::wire::version::{FieldGate, PROTOCOL_VERSION, ProtocolVersion};

/// The `getblocks` request. Same layout as `getheaders`; the peer answers
/// with an `inv` of up to 500 block hashes instead of headers.
///
/// https://developer.bitcoin.org/reference/p2p_networking.html#getblocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBlocksMessage {
    pub protocol_version: ProtocolVersion,
    block_locator_hashes: BlockLocator,
    pub hash_stop: BlockHash,
}

impl GetBlocksMessage {
    pub fn new(pver: ProtocolVersion, hash_stop: BlockHash) -> Self {
        Self {
            protocol_version: pver,
            block_locator_hashes: BlockLocator::locator(),
            hash_stop,
        }
    }

    pub fn add_block_locator_hash(&mut self, hash: BlockHash) -> Result<()> {
        self.block_locator_hashes.push(hash)
    }

    pub fn block_locator_hashes(&self) -> &[BlockHash] {
        &self.block_locator_hashes
    }
}

impl Default for GetBlocksMessage {
    fn default() -> Self {
        Self::new(PROTOCOL_VERSION, BlockHash::ZERO)
    }
}

impl Message for GetBlocksMessage {
    const COMMAND: Command = Command::GetBlocks;

    const FIELDS: &'static [FieldGate] = locator::FIELDS;

    fn encode<W: Write>(&self, w: &mut W, _pver: ProtocolVersion) -> Result<()> {
        locator::encode(
            w,
            self.protocol_version,
            &self.block_locator_hashes,
            &self.hash_stop,
        )
    }

    fn decode<R: Read>(&mut self, r: &mut R, _pver: ProtocolVersion) -> Result<()> {
        self.protocol_version =
            locator::decode(r, &mut self.block_locator_hashes, &mut self.hash_stop)?;
        Ok(())
    }

    fn max_payload_len(&self, _pver: ProtocolVersion) -> u32 {
        locator::max_payload_len()
    }
}
