use std::io::{Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::wire::command::Command;
use crate::wire::error::{Result, WireError};
use crate::wire::message::{Message, PingMessage};
use crate::wire::reader::WireReader;
use crate::wire::version::{BIP0031_VERSION, FieldGate, ProtocolVersion};

const NONCE: FieldGate = FieldGate::since("nonce", BIP0031_VERSION + 1);

/// Reply to a `ping`, echoing its nonce.
///
/// `pong` did not exist before BIP 31; encoding or decoding it at an older
/// version fails with [`WireError::UnsupportedVersion`].
///
/// https://developer.bitcoin.org/reference/p2p_networking.html#pong
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PongMessage {
    pub nonce: u64,
}

impl PongMessage {
    pub fn new(nonce: u64) -> Self {
        Self { nonce }
    }

    fn check_version(pver: ProtocolVersion) -> Result<()> {
        if NONCE.includes(pver) {
            Ok(())
        } else {
            Err(WireError::UnsupportedVersion {
                command: Self::COMMAND.name(),
                pver,
            })
        }
    }
}

impl From<PingMessage> for PongMessage {
    fn from(ping: PingMessage) -> Self {
        Self::new(ping.nonce)
    }
}

impl Message for PongMessage {
    const COMMAND: Command = Command::Pong;

    const FIELDS: &'static [FieldGate] = &[NONCE];

    fn encode<W: Write>(&self, w: &mut W, pver: ProtocolVersion) -> Result<()> {
        Self::check_version(pver)?;
        w.write_u64::<LittleEndian>(self.nonce)?;
        Ok(())
    }

    fn decode<R: Read>(&mut self, r: &mut R, pver: ProtocolVersion) -> Result<()> {
        Self::check_version(pver)?;
        self.nonce = WireReader::new(r).read_u64_field("nonce")?;
        Ok(())
    }

    fn max_payload_len(&self, pver: ProtocolVersion) -> u32 {
        if NONCE.includes(pver) { 8 } else { 0 }
    }
}
