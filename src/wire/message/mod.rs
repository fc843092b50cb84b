//! Typed P2P message payloads.
//!
//! Each message knows its command name, which fields exist at which
//! protocol version, how to write itself and how to fill itself from a
//! payload, and the largest payload it can legitimately produce.
//!
//! Protocol reference:
//! https://developer.bitcoin.org/reference/p2p_networking.html
use std::io::{Read, Write};

use crate::wire::command::Command;
use crate::wire::error::Result;
use crate::wire::version::{self, FieldGate, ProtocolVersion};

pub mod getblocks;
pub mod getheaders;
pub mod ping;
pub mod pong;

mod locator;

pub use getblocks::GetBlocksMessage;
pub use getheaders::GetHeadersMessage;
pub use ping::PingMessage;
pub use pong::PongMessage;

/// Implemented by every message payload with a typed codec.
pub trait Message: Sized {
    const COMMAND: Command;

    /// Fields in wire order with the version that introduced each.
    const FIELDS: &'static [FieldGate];

    /// Writes the payload for protocol version `pver`.
    fn encode<W: Write>(&self, w: &mut W, pver: ProtocolVersion) -> Result<()>;

    /// Fills `self` from a payload encoded at `pver`.
    ///
    /// On error the instance may be partially populated and must be
    /// discarded.
    fn decode<R: Read>(&mut self, r: &mut R, pver: ProtocolVersion) -> Result<()>;

    /// Largest payload this message can have at `pver`.
    fn max_payload_len(&self, pver: ProtocolVersion) -> u32;

    fn command(&self) -> &'static str {
        Self::COMMAND.name()
    }

    fn fields_at(pver: ProtocolVersion) -> Vec<&'static str> {
        version::fields_at(Self::FIELDS, pver)
    }

    fn to_payload(&self, pver: ProtocolVersion) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        self.encode(&mut payload, pver)?;
        Ok(payload)
    }
}
