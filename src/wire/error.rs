//! Error types for the wire codecs.

use std::io;

use thiserror::Error;

use crate::wire::version::ProtocolVersion;

/// Result type alias for wire operations.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors raised while encoding, decoding or framing messages.
///
/// None of these are retried by the codec. A decode failure means the peer
/// violated the protocol and the connection should be dropped.
#[derive(Error, Debug)]
pub enum WireError {
    /// Input ended before `field` was fully read.
    #[error("truncated input reading {field} at offset {offset}")]
    TruncatedInput { field: &'static str, offset: usize },

    /// A collection is (or is announced to be) larger than the protocol allows.
    #[error("{what}: {count} exceeds maximum of {max}")]
    LimitExceeded {
        what: &'static str,
        count: u64,
        max: usize,
    },

    /// The message does not exist at the negotiated protocol version.
    #[error("{command} is not valid at protocol version {pver}")]
    UnsupportedVersion {
        command: &'static str,
        pver: ProtocolVersion,
    },

    /// Announced payload length is over the command's maximum.
    #[error("{command} payload of {len} bytes exceeds maximum of {max}")]
    PayloadTooLarge { command: String, len: u64, max: u32 },

    #[error("network magic mismatch: expected {expected:#010x}, got {got:#010x}")]
    MagicMismatch { expected: u32, got: u32 },

    #[error("payload checksum mismatch")]
    ChecksumMismatch,

    /// The underlying reader or writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl WireError {
    /// True for errors caused by malformed or hostile input, as opposed to
    /// a failing transport.
    pub fn is_protocol_violation(&self) -> bool {
        !matches!(self, WireError::Io(_))
    }
}

/// Errors from parsing a display-order hex hash.
#[derive(Error, Debug, PartialEq)]
pub enum HashParseError {
    #[error("hash string has {0} hex digits, maximum is 64")]
    TooLong(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
