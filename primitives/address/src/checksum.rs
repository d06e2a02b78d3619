use core::fmt;

use blake2b_simd::Params;

/// Length in bytes of the checksum appended to the address payload.
pub const CHECKSUM_LEN: usize = 4;

/// Truncated BLAKE2b digest binding an address payload to its protocol.
///
/// Four bytes are enough to catch transcription mistakes in a copied string,
/// they do not provide cryptographic integrity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; CHECKSUM_LEN]);

impl Checksum {
    /// Hash `bytes` with unkeyed BLAKE2b configured for a 4 byte output.
    pub fn compute(bytes: &[u8]) -> Self {
        let hash = Params::new().hash_length(CHECKSUM_LEN).hash(bytes);
        let mut digest = [0; CHECKSUM_LEN];
        digest.copy_from_slice(hash.as_bytes());
        Self(digest)
    }

    /// Recompute the checksum over `bytes` and compare it with `expected`.
    ///
    /// A length mismatch is a mismatch.
    pub fn verify(bytes: &[u8], expected: &[u8]) -> bool {
        Self::compute(bytes).as_bytes() == expected
    }

    pub fn as_bytes(&self) -> &[u8; CHECKSUM_LEN] {
        &self.0
    }
}

impl From<[u8; CHECKSUM_LEN]> for Checksum {
    fn from(value: [u8; CHECKSUM_LEN]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Checksum {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Checksum").field(&hex::encode(self.0)).finish()
    }
}
