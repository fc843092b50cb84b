use std::io::{Read, Write};

use crate::wire::bounded::BlockLocator;
use crate::wire::command::Command;
use crate::wire::error::Result;
use crate::wire::hash::BlockHash;
use crate::wire::message::{Message, locator};
use crate::wire::version::{FieldGate, PROTOCOL_VERSION, ProtocolVersion};

/// The `getheaders` request.
///
/// The payload structure is:
///
/// ```text
/// uint32  protocol_version
/// varint  hash_count
/// hash[]  block_locator_hashes
/// hash    hash_stop
/// ```
///
/// Semantics:
/// The peer will:
/// 1. Find the first locator hash it recognizes in its active chain.
/// 2. Return headers *after* that block in forward chronological order.
/// 3. Stop after 2000 headers or when reaching `hash_stop`.
///
/// A zero `hash_stop` asks for as many headers as the peer will send.
///
/// Reference:
/// https://developer.bitcoin.org/reference/p2p_networking.html#getheaders
///
/// # Example
///
/// ```
/// use btc_wire::wire::{BlockHash, GetHeadersMessage, Message};
///
/// let genesis: BlockHash =
///     "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f".parse().unwrap();
///
/// let mut msg = GetHeadersMessage::new(70016);
/// msg.add_block_locator_hash(genesis).unwrap();
///
/// let payload = msg.to_payload(70016).unwrap();
/// assert_eq!(payload.len(), 4 + 1 + 32 + 32);
///
/// let mut decoded = GetHeadersMessage::default();
/// decoded.decode(&mut payload.as_slice(), 70016).unwrap();
/// assert_eq!(decoded, msg);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHeadersMessage {
    pub protocol_version: ProtocolVersion,
    block_locator_hashes: BlockLocator,
    pub hash_stop: BlockHash,
}

impl GetHeadersMessage {
    /// An empty request (no locators, zero stop hash) for `pver`.
    pub fn new(pver: ProtocolVersion) -> Self {
        Self {
            protocol_version: pver,
            block_locator_hashes: BlockLocator::locator(),
            hash_stop: BlockHash::ZERO,
        }
    }

    /// Appends a locator hash. Fails with `LimitExceeded` once 500 hashes
    /// are present.
    pub fn add_block_locator_hash(&mut self, hash: BlockHash) -> Result<()> {
        self.block_locator_hashes.push(hash)
    }

    pub fn block_locator_hashes(&self) -> &[BlockHash] {
        &self.block_locator_hashes
    }
}

impl Default for GetHeadersMessage {
    fn default() -> Self {
        Self::new(PROTOCOL_VERSION)
    }
}

impl Message for GetHeadersMessage {
    const COMMAND: Command = Command::GetHeaders;

    const FIELDS: &'static [FieldGate] = locator::FIELDS;

    fn encode<W: Write>(&self, w: &mut W, _pver: ProtocolVersion) -> Result<()> {
        locator::encode(
            w,
            self.protocol_version,
            &self.block_locator_hashes,
            &self.hash_stop,
        )
    }

    /// The protocol version read from the payload replaces
    /// `protocol_version`; `pver` only drives field gating.
    fn decode<R: Read>(&mut self, r: &mut R, _pver: ProtocolVersion) -> Result<()> {
        self.protocol_version =
            locator::decode(r, &mut self.block_locator_hashes, &mut self.hash_stop)?;
        Ok(())
    }

    fn max_payload_len(&self, _pver: ProtocolVersion) -> u32 {
        locator::max_payload_len()
    }
}
