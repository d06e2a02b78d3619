//! Conversion between raw bytes and the textual body of an address.
//!
//! The body is RFC-4648 base32 with the padding stripped and rendered in lower case.
//! Decoding accepts either case.

use data_encoding::BASE32_NOPAD;

use crate::error::Result;

/// Encode `bytes` as lowercase, unpadded base32.
pub fn to_text(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes).to_ascii_lowercase()
}

/// Decode an unpadded base32 body, in any case, back into bytes.
pub fn from_text(text: &str) -> Result<Vec<u8>> {
    Ok(BASE32_NOPAD.decode(text.to_ascii_uppercase().as_bytes())?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(to_text(&[]), "");
        assert_eq!(from_text("").unwrap(), Vec::<u8>::new());
    }

    #[rstest]
    #[case(b"f", "my")]
    #[case(b"fo", "mzxq")]
    #[case(b"foo", "mzxw6")]
    #[case(b"foob", "mzxw6yq")]
    #[case(b"fooba", "mzxw6ytb")]
    #[case(b"foobar", "mzxw6ytboi")]
    fn rfc4648_vectors_without_padding(#[case] bytes: &[u8], #[case] text: &str) {
        assert_eq!(to_text(bytes), text);
        assert_eq!(from_text(text).unwrap(), bytes);
    }

    #[test]
    fn decoding_ignores_case() {
        assert_eq!(from_text("MZXW6YTBOI").unwrap(), b"foobar");
        assert_eq!(from_text("MzXw6YtBoI").unwrap(), b"foobar");
    }

    #[rstest]
    #[case("mzxw6yq=")]
    #[case("mzxw6yq1")]
    #[case("mzxw6y!q")]
    #[case("m")]
    fn rejects_invalid_bodies(#[case] text: &str) {
        assert!(matches!(from_text(text), Err(Error::Decode(_))));
    }
}
