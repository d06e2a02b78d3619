use crate::checksum::Checksum;

/// Every way an address can fail to encode or decode.
///
/// Variants carry the offending value so callers can report what was wrong
/// without re-parsing the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no bytes to validate")]
    EmptyAddress,

    #[error("address is too short to validate, got {length} characters")]
    TooShort { length: usize },

    #[error("unknown address network {0:?}")]
    UnknownNetwork(char),

    #[error("unknown address protocol {0:?}")]
    UnknownProtocol(char),

    /// ID addresses may not exceed [`MAX_ID_ADDRESS_LEN`](crate::codec::MAX_ID_ADDRESS_LEN).
    #[error("invalid ID address length {length}, expected at most {max}", max = crate::codec::MAX_ID_ADDRESS_LEN)]
    InvalidIdLength { length: usize },

    #[error("invalid secp256k1 address length {length}, expected {expected}", expected = crate::codec::HASH_ADDRESS_LEN)]
    InvalidSecp256k1Length { length: usize },

    #[error("invalid actor address length {length}, expected {expected}", expected = crate::codec::HASH_ADDRESS_LEN)]
    InvalidActorLength { length: usize },

    #[error("invalid BLS address length {length}, expected {expected}", expected = crate::codec::BLS_ADDRESS_LEN)]
    InvalidBlsLength { length: usize },

    /// The body contains characters outside the base32 alphabet or has an impossible length.
    #[error("invalid base32 body: {0}")]
    Decode(#[from] data_encoding::DecodeError),

    /// The body decoded to fewer bytes than the checksum alone takes.
    #[error("decoded body has {length} bytes, not enough to hold a checksum")]
    MissingChecksum { length: usize },

    #[error("checksums don't match, expected {expected} but found {actual}")]
    ChecksumMismatch { expected: Checksum, actual: Checksum },

    #[error("did not encode this address properly: {input} re-encodes as {encoded}")]
    RoundTripMismatch { input: String, encoded: String },

    /// The address has no payload to encode.
    #[error("invalid address")]
    InvalidAddress,
}

/// Result alias for address operations.
pub type Result<T> = std::result::Result<T, Error>;
