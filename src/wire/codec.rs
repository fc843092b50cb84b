use std::io::{self, Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::wire::command::Command;
use crate::wire::constants::{COMMAND_SIZE, MAX_MESSAGE_PAYLOAD, MESSAGE_HEADER_SIZE, Network};
use crate::wire::error::{Result, WireError};
use crate::wire::message::{
    GetBlocksMessage, GetHeadersMessage, Message, PingMessage, PongMessage,
};
use crate::wire::version::ProtocolVersion;

/// A raw Bitcoin P2P message frame.
///
/// A frame consists of:
/// - 4-byte magic value (network identifier)
/// - 12-byte command
/// - 4-byte payload length
/// - 4-byte checksum
/// - variable-length payload
///
/// By the time a `RawMessage` exists, magic, length and checksum have been
/// validated by [`read_message`]; the payload itself is still opaque.
#[derive(Debug)]
pub struct RawMessage {
    pub command: Command,
    pub payload: Vec<u8>,
    pub magic: u32,
    pub checksum: [u8; 4],
}

/// A decoded payload.
///
/// Commands without a typed codec keep their raw bytes.
#[derive(Debug, PartialEq, Eq)]
pub enum Payload {
    GetHeaders(GetHeadersMessage),
    GetBlocks(GetBlocksMessage),
    Ping(PingMessage),
    Pong(PongMessage),
    Raw { command: Command, payload: Vec<u8> },
}

impl RawMessage {
    /// Decodes the payload with the codec registered for its command.
    ///
    /// Trailing bytes after the last field are ignored, matching how
    /// reference nodes treat payloads extended by newer protocol versions.
    pub fn decode(&self, pver: ProtocolVersion) -> Result<Payload> {
        fn typed<M: Message + Default>(payload: &[u8], pver: ProtocolVersion) -> Result<M> {
            let mut msg = M::default();
            msg.decode(&mut &payload[..], pver)?;
            Ok(msg)
        }

        let p = &self.payload;
        Ok(match self.command {
            Command::GetHeaders => Payload::GetHeaders(typed(p, pver)?),
            Command::GetBlocks => Payload::GetBlocks(typed(p, pver)?),
            Command::Ping => Payload::Ping(typed(p, pver)?),
            Command::Pong => Payload::Pong(typed(p, pver)?),
            command => Payload::Raw {
                command,
                payload: p.clone(),
            },
        })
    }
}

/// First 4 bytes of `SHA256(SHA256(payload))`.
pub fn checksum(payload: &[u8]) -> [u8; 4] {
    let hash = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Reads one message frame from any [`Read`] source.
///
/// This function:
/// 1. Reads the 24-byte message header
/// 2. Rejects a magic that does not belong to `network`
/// 3. Rejects a length above the command's maximum at `pver`, before
///    allocating the payload buffer
/// 4. Reads the payload and verifies its checksum
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use btc_wire::wire::{self, Command, Network};
///
/// let mut bytes = vec![];
/// wire::send_message(&mut bytes, Network::Mainnet, Command::Verack, &[]).unwrap();
///
/// let raw = wire::read_message(&mut Cursor::new(bytes), Network::Mainnet, 70016).unwrap();
/// assert_eq!(raw.command, Command::Verack);
/// assert!(raw.payload.is_empty());
/// ```
pub fn read_message<R: Read>(
    reader: &mut R,
    network: Network,
    pver: ProtocolVersion,
) -> Result<RawMessage> {
    let mut header = [0u8; MESSAGE_HEADER_SIZE];
    read_frame_part(reader, &mut header, "message header")?;

    let magic = u32::from_le_bytes(field::<4>(&header, 0));
    if magic != network.magic() {
        warn!(expected = network.magic(), got = magic, "network magic mismatch");
        return Err(WireError::MagicMismatch {
            expected: network.magic(),
            got: magic,
        });
    }

    let raw_command = field::<COMMAND_SIZE>(&header, 4);
    let command = Command::from(&raw_command);

    let length = u32::from_le_bytes(field::<4>(&header, 16));
    let max = command.max_payload_len(pver);
    if length > max {
        let name = String::from_utf8_lossy(&raw_command)
            .trim_matches(char::from(0))
            .to_string();
        warn!(command = %name, length, max, "rejecting oversized payload");
        return Err(WireError::PayloadTooLarge {
            command: name,
            len: length as u64,
            max,
        });
    }

    let checksum_field = field::<4>(&header, 20);

    let mut payload = vec![0u8; length as usize];
    read_frame_part(reader, &mut payload, "payload")?;

    if checksum(&payload) != checksum_field {
        warn!(command = ?command, length, "payload checksum mismatch");
        return Err(WireError::ChecksumMismatch);
    }

    debug!(command = ?command, length, "read message");

    Ok(RawMessage {
        command,
        payload,
        magic,
        checksum: checksum_field,
    })
}

/// Writes a complete message frame to the given writer.
///
/// ```text
/// +------------+--------------+---------------+------------+
/// | magic (4)  | command (12) | length (4 LE) | checksum(4)|
/// +------------+--------------+---------------+------------+
/// | payload (variable)                                ...  |
/// +----------------------------------------------------------
/// ```
///
/// # Errors
///
/// Returns `PayloadTooLarge` for payloads over `MAX_MESSAGE_PAYLOAD`, so the
/// 32-bit length field always matches the body, or an error if writing to
/// the underlying stream fails.
pub fn send_message<W: Write>(
    writer: &mut W,
    network: Network,
    command: Command,
    payload: &[u8],
) -> Result<()> {
    if payload.len() as u64 > MAX_MESSAGE_PAYLOAD as u64 {
        return Err(WireError::PayloadTooLarge {
            command: command.name().to_string(),
            len: payload.len() as u64,
            max: MAX_MESSAGE_PAYLOAD,
        });
    }

    let mut frame = Vec::with_capacity(MESSAGE_HEADER_SIZE + payload.len());

    frame.write_u32::<LittleEndian>(network.magic())?;
    frame.extend_from_slice(&command.as_bytes());
    frame.write_u32::<LittleEndian>(payload.len() as u32)?;
    frame.extend_from_slice(&checksum(payload));
    frame.extend_from_slice(payload);

    writer.write_all(&frame)?;

    debug!(command = ?command, length = payload.len(), "sent message");
    Ok(())
}

/// Encodes `msg` at `pver` and writes it as a framed message.
pub fn write_message<W: Write, M: Message>(
    writer: &mut W,
    network: Network,
    msg: &M,
    pver: ProtocolVersion,
) -> Result<()> {
    let payload = msg.to_payload(pver)?;
    send_message(writer, network, M::COMMAND, &payload)
}

fn read_frame_part<R: Read>(reader: &mut R, buf: &mut [u8], part: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            WireError::TruncatedInput {
                field: part,
                offset: 0,
            }
        } else {
            WireError::Io(e)
        }
    })
}

fn field<const N: usize>(header: &[u8; MESSAGE_HEADER_SIZE], at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&header[at..at + N]);
    out
}
