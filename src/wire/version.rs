//! Protocol versions and version-gated fields.
//!
//! A peer advertises its protocol version in the `version` message and both
//! sides serialize with the lower of the two. Fields introduced by later
//! protocol revisions are simply absent from the wire at older versions.
//!
//! Notable versions:
//! https://developer.bitcoin.org/reference/p2p_networking.html#protocol-versions

/// Negotiated wire dialect. Serialized as a 32-bit little-endian integer.
pub type ProtocolVersion = u32;

/// `addr` messages may carry more than one address.
pub const MULTIPLE_ADDRESS_VERSION: ProtocolVersion = 209;

/// `addr` entries carry a timestamp.
pub const NET_ADDRESS_TIME_VERSION: ProtocolVersion = 31402;

/// BIP 31: `ping` carries a nonce and `pong` exists.
pub const BIP0031_VERSION: ProtocolVersion = 60000;

/// BIP 35: `mempool` message.
pub const BIP0035_VERSION: ProtocolVersion = 60002;

/// BIP 37: bloom filters and the `relay` flag in `version`.
pub const BIP0037_VERSION: ProtocolVersion = 70001;

/// BIP 130: `sendheaders`.
pub const SEND_HEADERS_VERSION: ProtocolVersion = 70012;

/// BIP 133: `feefilter`.
pub const FEE_FILTER_VERSION: ProtocolVersion = 70013;

/// Protocol version this crate speaks by default.
///
/// Defined in Bitcoin Core:
/// https://github.com/bitcoin/bitcoin/blob/master/src/node/protocol_version.h
pub const PROTOCOL_VERSION: ProtocolVersion = 70016;

/// Every protocol revision the codecs are exercised against, oldest first.
pub const SUPPORTED_VERSIONS: &[ProtocolVersion] = &[
    MULTIPLE_ADDRESS_VERSION,
    NET_ADDRESS_TIME_VERSION,
    BIP0031_VERSION,
    BIP0035_VERSION,
    BIP0037_VERSION,
    SEND_HEADERS_VERSION,
    FEE_FILTER_VERSION,
    PROTOCOL_VERSION,
];

/// A message field together with the first protocol version carrying it.
///
/// A field is on the wire iff the negotiated version is `>= since`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGate {
    pub field: &'static str,
    pub since: ProtocolVersion,
}

impl FieldGate {
    /// A field present at every protocol version.
    pub const fn always(field: &'static str) -> Self {
        Self { field, since: 0 }
    }

    pub const fn since(field: &'static str, since: ProtocolVersion) -> Self {
        Self { field, since }
    }

    pub const fn includes(&self, pver: ProtocolVersion) -> bool {
        pver >= self.since
    }
}

/// Names of the fields from `gates` that are on the wire at `pver`, in
/// declaration order.
pub fn fields_at(gates: &[FieldGate], pver: ProtocolVersion) -> Vec<&'static str> {
    gates
        .iter()
        .filter(|g| g.includes(pver))
        .map(|g| g.field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_gate_includes_version_zero() {
        assert!(FieldGate::always("hash_stop").includes(0));
        assert!(FieldGate::always("hash_stop").includes(u32::MAX));
    }

    #[test]
    fn gate_boundary_is_inclusive() {
        let gate = FieldGate::since("nonce", BIP0031_VERSION + 1);
        assert!(!gate.includes(BIP0031_VERSION));
        assert!(gate.includes(BIP0031_VERSION + 1));
    }

    #[test]
    fn fields_at_filters_and_keeps_order() {
        let gates = [
            FieldGate::always("a"),
            FieldGate::since("b", BIP0037_VERSION),
            FieldGate::always("c"),
        ];
        assert_eq!(fields_at(&gates, BIP0035_VERSION), vec!["a", "c"]);
        assert_eq!(fields_at(&gates, PROTOCOL_VERSION), vec!["a", "b", "c"]);
    }

    #[test]
    fn supported_versions_are_sorted() {
        assert!(SUPPORTED_VERSIONS.windows(2).all(|w| w[0] < w[1]));
    }
}
