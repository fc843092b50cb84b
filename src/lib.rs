//! Bitcoin P2P wire encoding.
//!
//! See [`wire`] for the codec primitives and message types.
pub mod wire;
