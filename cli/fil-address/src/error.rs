use tracing_subscriber::filter::FromEnvError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    AddressError(#[from] primitives_address::Error),

    #[error("payload is not valid hex: {0}")]
    HexError(#[from] hex::FromHexError),

    #[error("failed to serialize output: {0}")]
    OutputError(#[from] serde_json::Error),

    #[error("failed to initialize the logger: {0}")]
    LoggerError(#[from] FromEnvError),
}
