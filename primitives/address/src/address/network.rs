use core::{fmt, str::FromStr};

/// Network an address is presented for.
///
/// Only the first character of the string form carries it; it is never part of the payload.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// `f`
    #[default]
    Mainnet,
    /// `t`
    Testnet,
}

impl Network {
    pub const fn prefix(self) -> char {
        match self {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }

    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'f' => Some(Network::Mainnet),
            't' => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" | "mainnet" => Ok(Network::Mainnet),
            "t" | "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network {other:?}, expected one of f, t")),
        }
    }
}
