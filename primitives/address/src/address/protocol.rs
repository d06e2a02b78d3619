use core::{fmt, str::FromStr};

/// Address kind, rendered as the second character of the string form.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Protocol {
    /// f0: ID protocol address.
    Id = 0,
    /// f1: SECP256K1 key address, 20 byte hash of PublicKey.
    Secp256k1 = 1,
    /// f2: Actor protocol address, 20 byte hash of actor data.
    Actor = 2,
    /// f3: BLS key address, full 48 byte public key.
    Bls = 3,
}

impl Protocol {
    /// Digit used for this protocol in the string form.
    pub fn digit(self) -> char {
        char::from(b'0' + self as u8)
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Protocol::Id),
            '1' => Some(Protocol::Secp256k1),
            '2' => Some(Protocol::Actor),
            '3' => Some(Protocol::Bls),
            _ => None,
        }
    }
}

impl From<Protocol> for u8 {
    fn from(value: Protocol) -> Self {
        value as u8
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Protocol::from_digit), chars.next()) {
            (Some(protocol), None) => Ok(protocol),
            _ => Err(format!("unknown protocol {s:?}, expected one of 0, 1, 2, 3")),
        }
    }
}
