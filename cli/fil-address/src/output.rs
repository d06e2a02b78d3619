use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human readable text.
    #[default]
    Plain,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    /// Render `value` in this format, using its `Display` implementation for plain output.
    pub(crate) fn format<T>(self, value: &T) -> Result<String, CliError>
    where
        T: Display + Serialize,
    {
        match self {
            OutputFormat::Plain => Ok(value.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
        }
    }
}
