use std::time::Duration;

use crate::{ClientError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the platform API, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `CTF_API_URL` and `CTF_API_TIMEOUT_SECS`, falling back to the
    /// defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("CTF_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("CTF_API_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ClientError::ConfigError(format!(
                    "CTF_API_TIMEOUT_SECS must be a number, got {:?}",
                    value
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs)))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("ctf-board/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
