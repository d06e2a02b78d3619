use std::fmt;

use clap::Subcommand;
use primitives_address::{Address, Codec, Network, Protocol};
use serde::Serialize;

use crate::{error::CliError, output::OutputFormat};

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Encode a hex payload as an address string
    Encode {
        /// Payload bytes, hex encoded
        payload: String,
        /// Network prefix, `f` for mainnet or `t` for testnet
        #[arg(long, default_value_t = Network::Mainnet)]
        network: Network,
        /// Address protocol, 0 (ID), 1 (Secp256k1), 2 (Actor) or 3 (BLS)
        #[arg(long, default_value_t = Protocol::Secp256k1)]
        protocol: Protocol,
    },
    /// Decode an address string and print its payload as hex
    Decode {
        /// Address string, e.g. f1abjxfbp274xpdqcpuaykwkfb43omjotacm2p3za
        address: String,
    },
    /// Decode an address string and print every part of it
    Inspect {
        /// Address string
        address: String,
    },
}

impl Command {
    /// Run the command and return what should be printed.
    #[tracing::instrument(level = "debug", skip(self, codec), fields(indicator = ?codec.indicator()))]
    pub(crate) fn run(self, codec: Codec, output_format: OutputFormat) -> Result<String, CliError> {
        match self {
            Command::Encode {
                payload,
                network,
                protocol,
            } => {
                let payload = hex::decode(payload.trim_start_matches("0x"))?;
                tracing::debug!(%network, %protocol, payload_len = payload.len(), "encoding");

                let address = codec.encode(network, &Address::new(protocol, payload))?;
                output_format.format(&Encoded { address })
            }
            Command::Decode { address } => {
                let payload = codec.decode(&address)?;
                output_format.format(&Decoded {
                    payload: hex::encode(payload),
                })
            }
            Command::Inspect { address } => {
                let (network, decoded) = codec.decode_address(&address)?;
                output_format.format(&Inspected {
                    checksum: codec.checksum(&decoded).to_string(),
                    payload: hex::encode(decoded.payload()),
                    protocol: decoded.protocol(),
                    network,
                    address,
                })
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct Encoded {
    address: String,
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[derive(Debug, Serialize)]
struct Decoded {
    payload: String,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

#[derive(Debug, Serialize)]
struct Inspected {
    address: String,
    network: Network,
    protocol: Protocol,
    payload: String,
    checksum: String,
}

impl fmt::Display for Inspected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Network: {:?} ({})", self.network, self.network)?;
        writeln!(f, "Protocol: {:?} ({})", self.protocol, self.protocol)?;
        writeln!(f, "Payload: {}", self.payload)?;
        write!(f, "Checksum: {}", self.checksum)
    }
}

#[cfg(test)]
mod tests {
    use primitives_address::IndicatorByte;
    use rstest::rstest;

    use super::*;

    const ADDRESS: &str = "f1abjxfbp274xpdqcpuaykwkfb43omjotacm2p3za";
    const PAYLOAD: &str = "00537285faff2ef1c04fa030ab28a1e6dcc4ba60";

    fn encode(payload: &str, network: Network, protocol: Protocol) -> Command {
        Command::Encode {
            payload: payload.to_string(),
            network,
            protocol,
        }
    }

    #[rstest]
    #[case(PAYLOAD)]
    #[case("0x00537285faff2ef1c04fa030ab28a1e6dcc4ba60")]
    fn encodes_hex_payload(#[case] payload: &str) {
        let output = encode(payload, Network::Mainnet, Protocol::Secp256k1)
            .run(Codec::default(), OutputFormat::Plain)
            .unwrap();
        assert_eq!(output, ADDRESS);
    }

    #[test]
    fn encodes_as_json() {
        let output = encode(PAYLOAD, Network::Mainnet, Protocol::Secp256k1)
            .run(Codec::default(), OutputFormat::Json)
            .unwrap();
        assert_eq!(output, format!(r#"{{"address":"{ADDRESS}"}}"#));
    }

    #[test]
    fn decodes_to_hex() {
        let output = Command::Decode {
            address: ADDRESS.to_string(),
        }
        .run(Codec::default(), OutputFormat::Plain)
        .unwrap();
        assert_eq!(output, PAYLOAD);
    }

    #[test]
    fn inspects_every_part() {
        let output = Command::Inspect {
            address: ADDRESS.to_string(),
        }
        .run(Codec::default(), OutputFormat::Json)
        .unwrap();
        assert_eq!(
            output,
            format!(
                r#"{{"address":"{ADDRESS}","network":"mainnet","protocol":"secp256k1","payload":"{PAYLOAD}","checksum":"1334fde4"}}"#
            )
        );
    }

    #[test]
    fn inspect_plain_lists_fields() {
        let output = Command::Inspect {
            address: ADDRESS.to_string(),
        }
        .run(Codec::default(), OutputFormat::Plain)
        .unwrap();
        assert!(output.contains("Network: Mainnet (f)"));
        assert!(output.contains("Protocol: Secp256k1 (1)"));
        assert!(output.ends_with("Checksum: 1334fde4"));
    }

    #[test]
    fn rejects_invalid_hex() {
        let result = encode("zz", Network::Mainnet, Protocol::Secp256k1)
            .run(Codec::default(), OutputFormat::Plain);
        assert!(matches!(result, Err(CliError::HexError(_))));
    }

    #[test]
    fn surfaces_address_errors() {
        let result = Command::Decode {
            address: String::new(),
        }
        .run(Codec::default(), OutputFormat::Plain);
        assert!(matches!(
            result,
            Err(CliError::AddressError(primitives_address::Error::EmptyAddress))
        ));
    }

    #[test]
    fn fixed_indicator_rejects_actor_addresses() {
        let codec = Codec::new(IndicatorByte::Fixed);
        let address = encode(PAYLOAD, Network::Testnet, Protocol::Actor)
            .run(codec, OutputFormat::Plain)
            .unwrap();
        assert!(address.starts_with("t2"));

        let result = Command::Decode { address }.run(codec, OutputFormat::Plain);
        assert!(matches!(
            result,
            Err(CliError::AddressError(
                primitives_address::Error::RoundTripMismatch { .. }
            ))
        ));
    }
}
