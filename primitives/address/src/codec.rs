//! String codec for addresses.
//!
//! The string form is `<network><protocol><body>`, where the body is the
//! lowercase, unpadded base32 encoding of `payload ++ checksum` and the checksum
//! is computed over `indicator byte ++ payload`.

use crate::{
    address::{Address, Network, Protocol},
    base32,
    checksum::{Checksum, CHECKSUM_LEN},
    error::{Error, Result},
};

/// Maximum length of an ID address string.
pub const MAX_ID_ADDRESS_LEN: usize = 22;

/// Length of a Secp256k1 or Actor address string, a 20 byte payload plus checksum.
pub const HASH_ADDRESS_LEN: usize = 41;

/// Length of a BLS address string, a 48 byte public key plus checksum.
pub const BLS_ADDRESS_LEN: usize = 86;

/// Indicator byte used by [`IndicatorByte::Fixed`].
const FIXED_INDICATOR_BYTE: u8 = 1;

/// Selects the byte prepended to the payload before computing the checksum.
///
/// Both policies agree on Secp256k1 addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorByte {
    /// The protocol digit of the address, decoded addresses keep the protocol they were parsed with.
    #[default]
    Protocol,
    /// Always `1`, and every decoded address is built as Secp256k1.
    ///
    /// Matches addresses produced by encoders that never distinguished protocols,
    /// so only `f1`/`t1` strings survive decoding under this policy.
    Fixed,
}

/// Encoder and decoder for the address string form.
///
/// Holds no state besides its [`IndicatorByte`] policy, every call is independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    indicator: IndicatorByte,
}

impl Codec {
    pub const fn new(indicator: IndicatorByte) -> Self {
        Self { indicator }
    }

    pub const fn indicator(&self) -> IndicatorByte {
        self.indicator
    }

    fn indicator_byte(&self, protocol: Protocol) -> u8 {
        match self.indicator {
            IndicatorByte::Protocol => protocol.into(),
            IndicatorByte::Fixed => FIXED_INDICATOR_BYTE,
        }
    }

    /// Protocol given to addresses built while decoding a string tagged with `parsed`.
    fn decoded_protocol(&self, parsed: Protocol) -> Protocol {
        match self.indicator {
            IndicatorByte::Protocol => parsed,
            IndicatorByte::Fixed => Protocol::Secp256k1,
        }
    }

    fn checksum_input(&self, protocol: Protocol, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.push(self.indicator_byte(protocol));
        bytes.extend_from_slice(payload);
        bytes
    }

    /// Checksum embedded in the string form of `address`.
    pub fn checksum(&self, address: &Address) -> Checksum {
        Checksum::compute(&self.checksum_input(address.protocol(), address.payload()))
    }

    /// Structural checks performed before any decoding work.
    ///
    /// Returns the network and protocol named by the first two characters.
    pub fn check_address_string(address: &str) -> Result<(Network, Protocol)> {
        if address.is_empty() {
            return Err(Error::EmptyAddress);
        }

        let length = address.chars().count();
        if length < 3 {
            return Err(Error::TooShort { length });
        }

        let mut chars = address.chars();
        // Both exist, the length was checked above.
        let (Some(network), Some(protocol)) = (chars.next(), chars.next()) else {
            return Err(Error::TooShort { length });
        };

        let network = Network::from_prefix(network).ok_or(Error::UnknownNetwork(network))?;
        let protocol = Protocol::from_digit(protocol).ok_or(Error::UnknownProtocol(protocol))?;

        match protocol {
            Protocol::Id if length > MAX_ID_ADDRESS_LEN => Err(Error::InvalidIdLength { length }),
            Protocol::Secp256k1 if length != HASH_ADDRESS_LEN => {
                Err(Error::InvalidSecp256k1Length { length })
            }
            Protocol::Actor if length != HASH_ADDRESS_LEN => {
                Err(Error::InvalidActorLength { length })
            }
            Protocol::Bls if length != BLS_ADDRESS_LEN => Err(Error::InvalidBlsLength { length }),
            _ => Ok((network, protocol)),
        }
    }

    /// Decode an address string into its network and address.
    pub fn decode_address(&self, address: &str) -> Result<(Network, Address)> {
        let (network, protocol) = Self::check_address_string(address)?;
        // The network and protocol characters are ASCII, so the body starts at byte 2.
        let raw = &address[2..];

        let payload_checksum = base32::from_text(raw)?;
        if payload_checksum.len() < CHECKSUM_LEN {
            return Err(Error::MissingChecksum {
                length: payload_checksum.len(),
            });
        }
        let (payload, checksum) = payload_checksum.split_at(payload_checksum.len() - CHECKSUM_LEN);

        let to_checksum = self.checksum_input(protocol, payload);
        if !Checksum::verify(&to_checksum, checksum) {
            let mut actual = [0; CHECKSUM_LEN];
            actual.copy_from_slice(checksum);
            return Err(Error::ChecksumMismatch {
                expected: Checksum::compute(&to_checksum),
                actual: actual.into(),
            });
        }

        if payload.is_empty() {
            return Err(Error::InvalidAddress);
        }

        let decoded = Address::new(self.decoded_protocol(protocol), payload);
        let encoded = self.encode(network, &decoded)?;
        if !is_same_address(&encoded, address) {
            return Err(Error::RoundTripMismatch {
                input: address.to_string(),
                encoded,
            });
        }

        tracing::trace!(%network, protocol = %decoded.protocol(), payload_len = decoded.payload().len(), "decoded address");
        Ok((network, decoded))
    }

    /// Decode an address string and return only its payload.
    pub fn decode(&self, address: &str) -> Result<Vec<u8>> {
        self.decode_address(address)
            .map(|(_, address)| address.into_payload())
    }

    /// Encode `address` for `network`.
    pub fn encode(&self, network: Network, address: &Address) -> Result<String> {
        if address.payload().is_empty() {
            return Err(Error::InvalidAddress);
        }

        let payload = address.payload();
        let checksum = self.checksum(address);

        let mut bytes = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(checksum.as_bytes());

        let mut encoded = String::with_capacity(2 + bytes.len() * 8 / 5 + 1);
        encoded.push(network.prefix());
        encoded.push(address.protocol().digit());
        encoded.push_str(&base32::to_text(&bytes));

        tracing::trace!(%encoded, "encoded address");
        Ok(encoded)
    }
}

/// Canonical `encoded` against caller `input`: tags must match exactly, the body in any case.
fn is_same_address(encoded: &str, input: &str) -> bool {
    encoded.len() == input.len()
        && encoded[..2] == input[..2]
        && encoded[2..].eq_ignore_ascii_case(&input[2..])
}
