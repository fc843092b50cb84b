//! Bitcoin P2P wire protocol primitives.
//!
//! This module converts protocol messages to and from the exact bytes
//! exchanged between nodes, for every protocol version a peer may
//! negotiate.
//!
//! It implements:
//! - CompactSize varints ([`varint`]) and 32-byte hashes ([`hash`])
//! - Version-gated fields ([`version`])
//! - Bounded collections that reject hostile counts before allocating
//!   ([`bounded`])
//! - Typed message codecs ([`message`]), `getheaders` among them
//! - The 24-byte message envelope ([`codec`])
//!
//! Protocol reference:
//! https://developer.bitcoin.org/reference/p2p_networking.html
pub mod bounded;
pub mod codec;
pub mod command;
pub mod constants;
pub mod error;
pub mod hash;
pub mod message;
pub mod reader;
pub mod varint;
pub mod version;

pub use bounded::{BlockLocator, BoundedVec};
pub use codec::{Payload, RawMessage, read_message, send_message, write_message};
pub use command::Command;
pub use constants::Network;
pub use error::{HashParseError, Result, WireError};
pub use hash::BlockHash;
pub use message::{GetBlocksMessage, GetHeadersMessage, Message, PingMessage, PongMessage};
pub use version::{PROTOCOL_VERSION, ProtocolVersion};
