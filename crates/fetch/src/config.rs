//! Configuration for the JSON fetcher.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for [`JsonFetcher`](crate::JsonFetcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for a whole request, including reading the body.
    #[serde(with = "duration_secs", default = "default_timeout")]
    pub timeout: Duration,

    /// Headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            headers: BTreeMap::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    /// Set the timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from variables resolved by `lookup`.
    ///
    /// Reads `NARROW_FETCH_TIMEOUT_SECS` and `NARROW_FETCH_USER_AGENT`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(secs) =
            lookup("NARROW_FETCH_TIMEOUT_SECS").and_then(|secs| secs.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(user_agent) = lookup("NARROW_FETCH_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config
    }

    /// Load configuration from a file.
    ///
    /// `.json` files are read as JSON, anything else as TOML.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::parse(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::parse(e.to_string()))
        }
    }
}

const fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("narrow/{}", env!("CARGO_PKG_VERSION"))
}

/// Serialization helper for Duration as seconds.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
