//! Filecoin address string codec.
//!
//! Addresses are written as `<network><protocol><body>`, e.g.
//! `f1abjxfbp274xpdqcpuaykwkfb43omjotacm2p3za`, where the body is the unpadded, lowercase
//! base32 encoding of the payload followed by a 4 byte BLAKE2b checksum.
//!
//! [`encode_payload`] and [`decode_payload`] cover the common case of mainnet Secp256k1
//! addresses, [`Codec`] exposes the full encoder and decoder.

pub mod address;
pub mod base32;
pub mod checksum;
pub mod codec;
mod error;

pub use address::{Address, Network, Protocol, BLS_PUB_LEN, PAYLOAD_HASH_LEN};
pub use checksum::{Checksum, CHECKSUM_LEN};
pub use codec::{Codec, IndicatorByte};
pub use error::{Error, Result};

/// Encode `payload` as a Secp256k1 address on mainnet.
///
/// Fails only if `payload` is empty.
pub fn encode_payload(payload: &[u8]) -> Result<String> {
    Codec::default().encode(Network::Mainnet, &Address::new_secp256k1(payload))
}

/// Decode an address string, discarding its network and protocol.
pub fn decode_payload(address: &str) -> Result<Vec<u8>> {
    Codec::default().decode(address)
}
