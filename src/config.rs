//! Runtime configuration
//!
//! Read from environment variables at startup.

use std::str::FromStr;

/// Output format for rendered recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "markdown" | "md" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Configuration for the command-line tools
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from `COOKBOOK_OUTPUT`
    ///
    /// Unrecognized values fall back to the default with a warning.
    pub fn from_env() -> Self {
        Self::from_output_var(std::env::var("COOKBOOK_OUTPUT").ok().as_deref())
    }

    fn from_output_var(value: Option<&str>) -> Self {
        let output_format = match value.map(OutputFormat::from_str) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                tracing::warn!("COOKBOOK_OUTPUT: {}; using text", e);
                OutputFormat::default()
            }
            None => OutputFormat::default(),
        };

        Self { output_format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" Markdown ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_config_defaults_to_text() {
        assert_eq!(Config::from_output_var(None).output_format, OutputFormat::Text);
        assert_eq!(Config::from_output_var(Some("xml")).output_format, OutputFormat::Text);
        assert_eq!(Config::from_output_var(Some("JSON")).output_format, OutputFormat::Json);
    }
}
