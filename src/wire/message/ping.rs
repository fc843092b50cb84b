use std::io::{Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::wire::command::Command;
use crate::wire::error::Result;
use crate::wire::message::Message;
use crate::wire::reader::WireReader;
use crate::wire::version::{BIP0031_VERSION, FieldGate, ProtocolVersion};

const NONCE: FieldGate = FieldGate::since("nonce", BIP0031_VERSION + 1);

/// The `ping` keep-alive.
///
/// Before BIP 31 the payload is empty. From `BIP0031_VERSION + 1` on it
/// carries a random nonce that the peer echoes back in `pong`.
///
/// https://developer.bitcoin.org/reference/p2p_networking.html#ping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingMessage {
    pub nonce: u64,
}

impl PingMessage {
    pub fn new(nonce: u64) -> Self {
        Self { nonce }
    }

    pub fn random() -> Self {
        Self::new(rand::random())
    }
}

impl Message for PingMessage {
    const COMMAND: Command = Command::Ping;

    const FIELDS: &'static [FieldGate] = &[NONCE];

    fn encode<W: Write>(&self, w: &mut W, pver: ProtocolVersion) -> Result<()> {
        if NONCE.includes(pver) {
            w.write_u64::<LittleEndian>(self.nonce)?;
        }
        Ok(())
    }

    fn decode<R: Read>(&mut self, r: &mut R, pver: ProtocolVersion) -> Result<()> {
        if NONCE.includes(pver) {
            self.nonce = WireReader::new(r).read_u64_field("nonce")?;
        }
        Ok(())
    }

    fn max_payload_len(&self, pver: ProtocolVersion) -> u32 {
        if NONCE.includes(pver) { 8 } else { 0 }
    }
}
