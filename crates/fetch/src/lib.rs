#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # narrow-fetch
//!
//! Fetch JSON over HTTP and narrow it with a `narrow-core` conversion.
//!
//! The fetcher only moves bytes: it issues the GET, rejects non-success
//! statuses, decodes the body into a `serde_json::Value`, and passes that
//! value to the caller's `try_from_unknown` function. Whatever that function
//! returns is propagated with its error payload intact.
//!
//! ## Example
//!
//! ```ignore
//! use narrow_fetch::{FetchConfig, JsonFetcher};
//!
//! let config = FetchConfig::default()
//!     .header("Accept", "application/vnd.github+json")
//!     .header("X-GitHub-Api-Version", "2022-11-28");
//! let fetcher = JsonFetcher::with_config(config)?;
//! let limits = fetcher
//!     .fetch_json("https://api.github.com/rate_limit", RateLimitResponse::try_from_unknown)
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::JsonFetcher;
pub use config::FetchConfig;
pub use error::{ConfigError, FetchError};
