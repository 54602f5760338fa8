//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use brain_core::BrainError;
use openai_brain::OpenAiBrainConfig;

/// Default server bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// QA API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Model client configuration.
    pub brain: OpenAiBrainConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `QA_API_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `OPENAI_API_KEY` | OpenAI API key | (required) |
    ///
    /// The remaining `OPENAI_*` variables are read by [`OpenAiBrainConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = parse_addr(env::var("QA_API_ADDR").ok().as_deref())?;
        let brain = OpenAiBrainConfig::from_env()?;

        Ok(Self { addr, brain })
    }
}

fn parse_addr(value: Option<&str>) -> Result<SocketAddr, ConfigError> {
    value
        .unwrap_or(DEFAULT_ADDR)
        .parse()
        .map_err(|_| ConfigError::InvalidAddr)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid QA_API_ADDR format")]
    InvalidAddr,

    #[error(transparent)]
    Brain(#[from] BrainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr() {
        assert_eq!(
            parse_addr(None).unwrap(),
            "127.0.0.1:8000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(parse_addr(Some("0.0.0.0:9000")).unwrap().port(), 9000);
        assert!(matches!(
            parse_addr(Some("localhost")),
            Err(ConfigError::InvalidAddr)
        ));
    }

    #[test]
    fn test_brain_error_is_wrapped() {
        let err: ConfigError = BrainError::Configuration("OPENAI_API_KEY not set".to_string()).into();
        assert_eq!(err.to_string(), "configuration error: OPENAI_API_KEY not set");
    }
}
