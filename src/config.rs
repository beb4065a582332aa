//! Configuration types for standings-fetch

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP fetch settings
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total request timeout (None = the HTTP client's default)
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent with the request (default: "standings-fetch/<version>")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration for a standings-fetch run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Print the "Enter the Url: " prompt to standard error before reading
    #[serde(default)]
    pub prompt: bool,
}

impl Config {
    /// Check values that the type system cannot rule out
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout == Some(Duration::ZERO) {
            return Err(Error::Config {
                message: "timeout must be greater than zero".to_string(),
                key: Some("fetch.timeout".to_string()),
            });
        }

        if self.fetch.user_agent.trim().is_empty() {
            return Err(Error::Config {
                message: "user agent must not be empty".to_string(),
                key: Some("fetch.user_agent".to_string()),
            });
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    concat!("standings-fetch/", env!("CARGO_PKG_VERSION")).to_string()
}
