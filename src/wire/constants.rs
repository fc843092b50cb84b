/// Size in bytes of a double-SHA256 hash on the wire.
pub const HASH_SIZE: usize = 32;

/// Maximum number of bytes a CompactSize (varint) can occupy.
///
/// Used when computing worst-case payload sizes, regardless of how
/// many bytes the actual count would need.
pub const MAX_VAR_INT_PAYLOAD: usize = 9;

/// Maximum number of block locator hashes allowed in a single
/// `getheaders` or `getblocks` message.
///
/// Bitcoin Core:
/// https://github.com/bitcoin/bitcoin/blob/master/src/net_processing.cpp (MAX_LOCATOR_SZ)
pub const MAX_BLOCK_LOCATORS_PER_MSG: usize = 500;

/// Upper bound for any message payload, whatever its command.
///
/// Unknown commands are still bounded by this value when framed.
pub const MAX_MESSAGE_PAYLOAD: u32 = 32 * 1024 * 1024;

/// Size of the P2P message header preceding every payload.
pub const MESSAGE_HEADER_SIZE: usize = 24;

/// Size of the NUL padded command field in the message header.
pub const COMMAND_SIZE: usize = 12;

/// The genesis block hash for Bitcoin mainnet, in wire (little-endian) order.
///
/// Human-readable (display) form:
///
/// ```text
/// 000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f
/// ```
pub const GENESIS_BLOCK_HASH_MAINNET: [u8; 32] = [
    0x6f, 0xe2, 0x8c, 0x0a, 0xb6, 0xf1, 0xb3, 0x72, 0xc1, 0xa6, 0xa2, 0x46, 0xae, 0x63, 0xf7, 0x4f,
    0x93, 0x1e, 0x83, 0x65, 0xe1, 0x5a, 0x08, 0x9c, 0x68, 0xd6, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Bitcoin networks and their message-start ("magic") values.
///
/// The first 4 bytes of every P2P message identify the network and act as
/// a message boundary marker in the TCP stream.
///
/// Bitcoin Core maps magic values to networks in `GetNetworkForMagic`:
/// https://github.com/bitcoin/bitcoin/blob/master/src/kernel/chainparams.cpp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet3,
    Regtest,
    Signet,
}

impl Network {
    /// Magic value, serialized little-endian at the start of each frame.
    pub const fn magic(self) -> u32 {
        match self {
            Network::Mainnet => 0xD9B4BEF9,
            Network::Testnet3 => 0x0709110B,
            Network::Regtest => 0xDAB5BFFA,
            Network::Signet => 0x40CF030A,
        }
    }

    pub fn from_magic(magic: u32) -> Option<Self> {
        [
            Network::Mainnet,
            Network::Testnet3,
            Network::Regtest,
            Network::Signet,
        ]
        .into_iter()
        .find(|n| n.magic() == magic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_magic_bytes_on_the_wire() {
        assert_eq!(Network::Mainnet.magic().to_le_bytes(), [0xF9, 0xBE, 0xB4, 0xD9]);
    }

    #[test]
    fn from_magic_finds_every_network() {
        for n in [
            Network::Mainnet,
            Network::Testnet3,
            Network::Regtest,
            Network::Signet,
        ] {
            assert_eq!(Network::from_magic(n.magic()), Some(n));
        }
        assert_eq!(Network::from_magic(0xDEADBEEF), None);
    }
}
