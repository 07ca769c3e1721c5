use anyhow::{Context, Result};
use client::ClientConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upstream API settings, read from `CTF_API_URL` and `CTF_API_TIMEOUT_SECS`.
    pub client: ClientConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse::<u16>()
                .context("PORT must be a number")?,
            client: ClientConfig::from_env().context("Invalid upstream API configuration")?,
        })
    }
}
