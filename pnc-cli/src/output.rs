//! Output rendering
//!
//! Results are printed as YAML unless JSON was requested.

use anyhow::Context;
use serde::Serialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Yaml
        }
    }
}

/// Render a value in the requested format
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to format JSON output")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to format YAML output")?,
    };
    Ok(text)
}

/// Render a value and print it to stdout
pub fn print<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> CliResult<()> {
    let text = render(value, format).map_err(CliError::failure)?;
    println!("{}", text.trim_end());
    Ok(())
}
