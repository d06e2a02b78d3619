pub use network::Network;
pub use protocol::Protocol;

mod network;
mod protocol;

/// Hash length of payload for SECP and Actor addresses.
pub const PAYLOAD_HASH_LEN: usize = 20;

/// BLS public key length used for validation of BLS addresses.
pub const BLS_PUB_LEN: usize = 48;

/// Address is the struct that defines the protocol and the raw payload bytes.
///
/// Building one does not check that the payload length suits the protocol,
/// [`Codec`](crate::Codec) validates the string form before it constructs an address.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    protocol: Protocol,
    #[cfg_attr(feature = "serde", serde(with = "hex"))]
    payload: Vec<u8>,
}

impl Address {
    pub fn new(protocol: Protocol, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            protocol,
            payload: payload.into(),
        }
    }

    pub fn new_secp256k1(payload: impl Into<Vec<u8>>) -> Self {
        Self::new(Protocol::Secp256k1, payload)
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}
