//! Command line front end for the Filecoin address codec.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

mod command;
mod error;
mod output;

use clap::Parser;
use primitives_address::{Codec, IndicatorByte};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{command::Command, error::CliError, output::OutputFormat};

/// Encode, decode and inspect Filecoin address strings.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, env = "FIL_ADDRESS_OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Plain)]
    output_format: OutputFormat,

    /// Always checksum with indicator byte 1, matching encoders that never distinguished
    /// protocols. Only `f1`/`t1` addresses decode in this mode.
    #[arg(long, env = "FIL_ADDRESS_FIXED_INDICATOR_BYTE")]
    fixed_indicator_byte: bool,
}

impl Cli {
    fn codec(&self) -> Codec {
        if self.fixed_indicator_byte {
            Codec::new(IndicatorByte::Fixed)
        } else {
            Codec::new(IndicatorByte::Protocol)
        }
    }
}

fn main() -> Result<(), CliError> {
    // Logger initialization. Results go to stdout, so logs are kept on stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env()?,
        )
        .init();

    let cli = Cli::parse();
    let codec = cli.codec();
    let output = cli.command.run(codec, cli.output_format)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_options() {
        let cli = Cli::try_parse_from([
            "fil-address",
            "--output-format",
            "json",
            "--fixed-indicator-byte",
            "decode",
            "f1abjxfbp274xpdqcpuaykwkfb43omjotacm2p3za",
        ])
        .unwrap();
        assert_eq!(cli.output_format, OutputFormat::Json);
        assert_eq!(cli.codec().indicator(), IndicatorByte::Fixed);
    }

    #[test]
    fn encode_defaults_to_mainnet_secp256k1() {
        let cli = Cli::try_parse_from(["fil-address", "encode", "00ff"]).unwrap();
        let Command::Encode {
            network, protocol, ..
        } = cli.command
        else {
            panic!("expected the encode command");
        };
        assert_eq!(network, primitives_address::Network::Mainnet);
        assert_eq!(protocol, primitives_address::Protocol::Secp256k1);
        assert_eq!(cli.codec().indicator(), IndicatorByte::Protocol);
    }

    #[test]
    fn encode_accepts_network_and_protocol() {
        let cli = Cli::try_parse_from([
            "fil-address",
            "encode",
            "--network",
            "t",
            "--protocol",
            "3",
            "00ff",
        ])
        .unwrap();
        let Command::Encode {
            network, protocol, ..
        } = cli.command
        else {
            panic!("expected the encode command");
        };
        assert_eq!(network, primitives_address::Network::Testnet);
        assert_eq!(protocol, primitives_address::Protocol::Bls);
    }

    #[test]
    fn rejects_unknown_protocol() {
        assert!(Cli::try_parse_from(["fil-address", "encode", "--protocol", "4", "00"]).is_err());
    }
}
