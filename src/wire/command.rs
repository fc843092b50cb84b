use crate::wire::constants::{COMMAND_SIZE, MAX_MESSAGE_PAYLOAD, MAX_VAR_INT_PAYLOAD};
use crate::wire::message::{
    GetBlocksMessage, GetHeadersMessage, Message, PingMessage, PongMessage,
};
use crate::wire::version::ProtocolVersion;

/// Maximum number of headers in a single `headers` message.
pub const MAX_BLOCK_HEADERS_PER_MSG: usize = 2000;

/// Command names this crate routes, as carried in the 12-byte command field
/// of the message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Control
    Version,
    Verack,
    Ping,
    Pong,
    SendHeaders,
    // Header sync
    GetBlocks,
    GetHeaders,
    Headers,
    Inv,

    Unknown,
}

impl From<&[u8; COMMAND_SIZE]> for Command {
    fn from(bytes: &[u8; COMMAND_SIZE]) -> Self {
        let cmd = std::str::from_utf8(bytes)
            .unwrap_or("")
            .trim_matches(char::from(0));

        match cmd {
            "version" => Command::Version,
            "verack" => Command::Verack,
            "ping" => Command::Ping,
            "pong" => Command::Pong,
            "sendheaders" => Command::SendHeaders,
            "getblocks" => Command::GetBlocks,
            "getheaders" => Command::GetHeaders,
            "headers" => Command::Headers,
            "inv" => Command::Inv,
            _ => Command::Unknown,
        }
    }
}

impl Command {
    /// ASCII command name. Empty for [`Command::Unknown`].
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Version => "version",
            Command::Verack => "verack",
            Command::Ping => "ping",
            Command::Pong => "pong",
            Command::SendHeaders => "sendheaders",
            Command::GetBlocks => "getblocks",
            Command::GetHeaders => "getheaders",
            Command::Headers => "headers",
            Command::Inv => "inv",
            Command::Unknown => "",
        }
    }

    /// Returns the 12-byte command field as defined by the Bitcoin P2P protocol.
    ///
    /// The command string is ASCII and padded with zero bytes.
    pub fn as_bytes(&self) -> [u8; COMMAND_SIZE] {
        let name = self.name().as_bytes();
        let mut padded = [0u8; COMMAND_SIZE];
        padded[..name.len()].copy_from_slice(name);
        padded
    }

    /// Largest payload a peer may announce for this command at `pver`.
    ///
    /// Checked against the header's length field before the payload buffer
    /// is allocated.
    pub fn max_payload_len(&self, pver: ProtocolVersion) -> u32 {
        match self {
            Command::GetHeaders => GetHeadersMessage::default().max_payload_len(pver),
            Command::GetBlocks => GetBlocksMessage::default().max_payload_len(pver),
            Command::Ping => PingMessage::default().max_payload_len(pver),
            Command::Pong => PongMessage::default().max_payload_len(pver),
            Command::Verack | Command::SendHeaders => 0,
            // count + (80-byte header + zero tx count) per entry
            Command::Headers => (MAX_VAR_INT_PAYLOAD + MAX_BLOCK_HEADERS_PER_MSG * 81) as u32,
            Command::Version | Command::Inv | Command::Unknown => MAX_MESSAGE_PAYLOAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::version::{BIP0031_VERSION, PROTOCOL_VERSION};

    const ALL: [Command; 9] = [
        Command::Version,
        Command::Verack,
        Command::Ping,
        Command::Pong,
        Command::SendHeaders,
        Command::GetBlocks,
        Command::GetHeaders,
        Command::Headers,
        Command::Inv,
    ];

    #[test]
    fn as_bytes_round_trips_through_from() {
        for cmd in ALL {
            assert_eq!(Command::from(&cmd.as_bytes()), cmd);
        }
    }

    #[test]
    fn getheaders_is_nul_padded() {
        assert_eq!(&Command::GetHeaders.as_bytes(), b"getheaders\0\0");
    }

    #[test]
    fn unrecognised_names_map_to_unknown() {
        let mut raw = [0u8; 12];
        raw[..10].copy_from_slice(b"wtfmessage");
        assert_eq!(Command::from(&raw), Command::Unknown);
        assert_eq!(Command::from(&[0xFFu8; 12]), Command::Unknown);
    }

    #[test]
    fn max_payload_per_command() {
        assert_eq!(Command::GetHeaders.max_payload_len(PROTOCOL_VERSION), 16045);
        assert_eq!(Command::GetBlocks.max_payload_len(PROTOCOL_VERSION), 16045);
        assert_eq!(Command::Ping.max_payload_len(PROTOCOL_VERSION), 8);
        assert_eq!(Command::Ping.max_payload_len(BIP0031_VERSION), 0);
        assert_eq!(Command::Verack.max_payload_len(PROTOCOL_VERSION), 0);
        assert_eq!(Command::Headers.max_payload_len(PROTOCOL_VERSION), 162_009);
        assert_eq!(
            Command::Unknown.max_payload_len(PROTOCOL_VERSION),
            MAX_MESSAGE_PAYLOAD
        );
    }
}
