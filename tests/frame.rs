use std::io::Cursor;

use btc_wire::wire::version::{BIP0031_VERSION, SUPPORTED_VERSIONS};
use btc_wire::wire::{
    self, BlockHash, Command, GetHeadersMessage, Message, Network, PingMessage, Payload, WireError,
};

fn header_sync_request(pver: u32) -> GetHeadersMessage {
    let mut msg = GetHeadersMessage::new(pver);
    for hex in [
        "000000000002e7ad7b9eef9479e4aabc65cb831269cc20d2632c13684406dee0",
        "000000000002710f40c87ec93d010a6fd95f42c59a2cbacc60b18cf6b7957535",
    ] {
        msg.add_block_locator_hash(hex.parse().unwrap()).unwrap();
    }
    msg.hash_stop = "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
        .parse()
        .unwrap();
    msg
}

#[test]
fn getheaders_survives_framing_at_every_version() {
    for &pver in SUPPORTED_VERSIONS {
        let msg = header_sync_request(pver);

        let mut stream = vec![];
        wire::write_message(&mut stream, Network::Signet, &msg, pver).unwrap();

        let raw = wire::read_message(&mut Cursor::new(stream), Network::Signet, pver).unwrap();
        assert_eq!(raw.command, Command::GetHeaders);
        assert_eq!(raw.payload.len(), 4 + 1 + 3 * 32);
        assert_eq!(raw.decode(pver).unwrap(), Payload::GetHeaders(msg));
    }
}

#[test]
fn hostile_locator_count_inside_valid_frame() {
    // A frame within the size limit whose payload announces 0xFFFF hashes.
    let mut payload = 70016u32.to_le_bytes().to_vec();
    payload.extend([0xFD, 0xFF, 0xFF]);
    payload.extend([0u8; 32]);

    let mut stream = vec![];
    wire::send_message(&mut stream, Network::Mainnet, Command::GetHeaders, &payload).unwrap();

    let raw = wire::read_message(&mut Cursor::new(stream), Network::Mainnet, 70016).unwrap();
    let err = raw.decode(70016).unwrap_err();
    assert!(err.is_protocol_violation());
    assert!(matches!(
        err,
        WireError::LimitExceeded {
            count: 0xFFFF,
            max: 500,
            ..
        }
    ));
}

#[test]
fn ping_gating_follows_negotiated_version() {
    let ping = PingMessage::new(7);

    let mut old = vec![];
    wire::write_message(&mut old, Network::Mainnet, &ping, BIP0031_VERSION).unwrap();
    assert_eq!(old.len(), 24);

    let raw = wire::read_message(&mut Cursor::new(old), Network::Mainnet, BIP0031_VERSION).unwrap();
    assert_eq!(
        raw.decode(BIP0031_VERSION).unwrap(),
        Payload::Ping(PingMessage::default())
    );

    // The same old frame is still within bounds for a newer reader, but the
    // nonce it expects is missing.
    let mut old = vec![];
    wire::write_message(&mut old, Network::Mainnet, &ping, BIP0031_VERSION).unwrap();
    let raw = wire::read_message(&mut Cursor::new(old), Network::Mainnet, 70016).unwrap();
    assert!(matches!(
        raw.decode(70016),
        Err(WireError::TruncatedInput { field: "nonce", .. })
    ));
}

#[test]
fn display_hash_round_trips_through_payload_bytes() {
    let msg = header_sync_request(60002);
    let payload = msg.to_payload(60002).unwrap();

    let mut stop = [0u8; 32];
    stop.copy_from_slice(&payload[payload.len() - 32..]);
    assert_eq!(BlockHash::from_wire_bytes(stop), msg.hash_stop);
    assert_eq!(
        BlockHash::from_wire_bytes(stop).to_string(),
        "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
    );
}
